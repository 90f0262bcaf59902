mod auth_test;
mod copy_test;
mod helpers;
