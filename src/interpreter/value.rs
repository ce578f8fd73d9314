/// The `Value` enum and the capability contract every value honours.
///
/// Every runtime value supports member access and invocation; kinds that
/// have no meaning for one of them reject it with a typed error.
pub mod core;
/// Class and instance values.
///
/// Classes come from user declarations or from the host library. Invoking a
/// class constructs an instance seeded from the class's instance members.
pub mod class;
/// Method values.
///
/// User methods run their declared body in a fresh child of the scope they
/// were declared in. Host methods call a Rust closure.
pub mod method;
/// Package values, named bundles used for library namespacing and imports.
pub mod package;
