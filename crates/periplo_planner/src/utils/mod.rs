pub mod bounded_list;
