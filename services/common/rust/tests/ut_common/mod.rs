pub const EXAMPLE_REL_PATH: &str = "/tests/examples/";

pub fn ut_example_fullpath(fname: &str) -> String {
    env!("CARGO_MANIFEST_DIR").to_string() + EXAMPLE_REL_PATH + fname
}
