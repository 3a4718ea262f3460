pub mod ast;
pub mod translate;

#[cfg(test)]
mod tests;

pub use ast::{
    ExtBinaryPredicate, ExtColumnDesc, ExtFunctionPredicate, ExtInPredicate, ExtPredicate,
};
pub use translate::{PASSTHROUGH_FN, Unrepresentable, is_passthrough_fn, translate};
