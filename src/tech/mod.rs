pub mod gf180;
