//! `formforge catalog` - list the side-panel field types.

use std::io::Write;

use anyhow::Result;
use formforge_layout::side_panel_catalog;

use crate::io::write_json;

pub fn run_catalog(out: &mut dyn Write, pretty: bool) -> Result<()> {
    write_json(out, &side_panel_catalog(), pretty)
}
