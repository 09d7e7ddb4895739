use anyhow::anyhow;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;
use crate::schemas::SchemaRegistry;

/// Handle `recipes schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new()?;
    let Some(name) = args.type_name.as_deref() else {
        return output(&registry.list(), flags.format);
    };
    let schema = registry.get(name).ok_or_else(|| {
        anyhow!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}
