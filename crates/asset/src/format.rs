//! Registry of supported model formats: per-format metadata plus `can_load`
//! and `load` entry points. Saving is not implemented for any format here.

use corelib::LoadResult;

use crate::mesh::Model;
use crate::smd;

pub type CanLoadFn = fn(file_name: &str, buffer: &[u8]) -> bool;
pub type LoadFn = fn(file_name: &str, frame_num: i32, buffer: &[u8]) -> LoadResult<Model>;
pub type SaveFn = fn(file_name: &str, model: &Model) -> LoadResult<()>;

/// Static description of one supported model format.
#[derive(Clone, Copy)]
pub struct FormatModule {
    /// Short format identifier, e.g. "smd".
    pub name: &'static str,
    pub version: &'static str,
    pub display_name: &'static str,
    pub author: &'static str,
    pub copyright: &'static str,
    /// Extensions the sniff check recognizes, lowercase, without the dot.
    pub extensions: &'static [&'static str],
    pub can_load: CanLoadFn,
    pub load: LoadFn,
    pub save: Option<SaveFn>,
}

const SMD_EXTENSIONS: &[&str] = &["smd"];

/// Extension sniff only; the buffer content is never inspected. The match
/// is a case-insensitive substring search for `.<ext>` anywhere in the
/// file name.
fn smd_can_load(file_name: &str, _buffer: &[u8]) -> bool {
    let lower = file_name.to_ascii_lowercase();
    SMD_EXTENSIONS
        .iter()
        .any(|ext| lower.contains(&format!(".{ext}")))
}

fn smd_load(file_name: &str, frame_num: i32, buffer: &[u8]) -> LoadResult<Model> {
    smd::load_smd(buffer, file_name, frame_num)
}

pub const SMD_MODULE: FormatModule = FormatModule {
    name: "smd",
    version: "0.1",
    display_name: "Source SMD",
    author: "smdview contributors",
    copyright: "2026 smdview contributors",
    extensions: SMD_EXTENSIONS,
    can_load: smd_can_load,
    load: smd_load,
    save: None,
};

/// All registered format modules.
pub const MODULES: &[&FormatModule] = &[&SMD_MODULE];

/// First module whose sniff accepts the file name.
pub fn find_format(file_name: &str, buffer: &[u8]) -> Option<&'static FormatModule> {
    MODULES
        .iter()
        .copied()
        .find(|module| (module.can_load)(file_name, buffer))
}
