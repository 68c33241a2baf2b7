pub mod synthetic_tiles;
