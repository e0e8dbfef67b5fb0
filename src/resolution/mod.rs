/// Reference resolution module.
///
/// Resolves free-text manager references, typed by people into a roster, to
/// the id of the roster entry they designate.
mod resolver;

pub use resolver::ReferenceResolver;
