pub mod osdi;
