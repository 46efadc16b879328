pub mod synthetic_hits;
