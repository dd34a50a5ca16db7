pub mod dynamic_array;
pub mod growth;
