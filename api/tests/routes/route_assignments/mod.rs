mod common;
mod delete_test;
mod get_test;
mod post_test;
