//! Copy every set option from one configured object onto another

use crate::configurer::{BindingContext, Configurable};
use crate::error::BindingError;
use tracing::{debug, trace};

/// Copy each option of `source` whose current value is present onto `target`
///
/// Both objects are initialised and their configurers resolved through
/// `ctx`. Nothing is copied unless the source configurer can enumerate its
/// options. Options are applied ignoring case. Returns `Ok(true)` when at
/// least one option was applied; errors from the target configurer
/// propagate.
pub fn copy(
    ctx: &BindingContext,
    source: &mut dyn Configurable,
    target: &mut dyn Configurable,
) -> Result<bool, BindingError> {
    let target_configurer = ctx.resolve_configurer(target);
    let source_configurer = ctx.resolve_configurer(source);

    let (Some(target_configurer), Some(source_configurer)) = (target_configurer, source_configurer) else {
        trace!(
            source = %source.describe(),
            bean = %target.describe(),
            "Missing configurer, nothing copied"
        );
        return Ok(false);
    };
    let Some(getter) = source_configurer.getter() else {
        trace!(source = %source.describe(), "Source configurer cannot enumerate options");
        return Ok(false);
    };

    let source_any = source.as_any();
    let mut applied = false;
    for name in getter.all_options(source_any) {
        let Some(value) = getter.option_value(source_any, &name, true) else {
            continue;
        };
        applied |= target_configurer.configure(target.as_any_mut(), &name, &value, true)?;
    }

    debug!(
        source = %source.describe(),
        bean = %target.describe(),
        applied,
        "Copied options between objects"
    );
    Ok(applied)
}
