mod args;

pub use args::{Args, CompressArgs, Orientation, PageSize, TemplateKind};
