pub mod extract;
pub mod lexicon;
pub mod scan;
