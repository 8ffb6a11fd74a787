//! 平台相关输出

mod cli;

pub use cli::{print_error, print_output, print_shape_list};
