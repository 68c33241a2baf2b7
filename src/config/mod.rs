pub mod album_bar;
