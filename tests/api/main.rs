mod registrations;

/// Each file in the tests/ folder gets compiled as its own crate. `cargo`
/// compiles each test executable in isolation and warns us if, for a specific
/// test file, one or more public functions in `helpers` have never been
/// invoked. Sub-modules *scoped to a single executable* avoid that noise.
#[allow(dead_code)]
struct Dummy;
