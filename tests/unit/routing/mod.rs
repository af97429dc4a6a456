pub mod test_guard;
