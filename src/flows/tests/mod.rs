mod common;
mod employee;
