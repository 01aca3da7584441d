use crate::attributes::ATTRIBUTES;
use crate::commands::CmdResult;

/// List every product attribute criteria can name.
pub fn run() -> CmdResult<'static> {
    CmdResult::default().with_attributes(ATTRIBUTES.iter().collect())
}
