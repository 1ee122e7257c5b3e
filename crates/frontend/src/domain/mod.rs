pub mod a001_packing;
