//! Flexibility: resolving flexible lengths within one flex line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::{debug, trace};

use crate::chapter4::{FlexItem, FlexViolation};

/// Clamp `value` to optional definite bounds. A `min` larger than `max` wins, as in CSS.
#[inline]
pub fn clamp_to_bounds(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let capped = max.map_or(value, |max_v| value.min(max_v));
    min.map_or(capped, |min_v| capped.max(min_v))
}

/// Which flex factor a line distributes with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FlexMode {
    Grow,
    Shrink,
}

/// Size every item of a line whose container main size is infinite: no free space exists, so
/// items keep their preferred main size.
pub fn freeze_at_preferred(items: &mut [FlexItem]) {
    for item in items {
        item.used_main_size = if item.collapsed {
            0.0
        } else {
            item.flex_preferred_main_size
        };
        item.frozen = true;
        item.flex_violation = FlexViolation::None;
    }
}

/// Resolve the used main size of every item of one line.
///
/// Free space is measured on outer sizes: frozen items count with their used size, unfrozen
/// ones with their base size, and every non-collapsed item adds its insets. Collapsed items are
/// frozen at zero.
pub fn resolve_flexible_lengths(items: &mut [FlexItem], container_main_size: f32) {
    let noncontent: f32 = items
        .iter()
        .filter(|item| !item.collapsed)
        .map(|item| item.main_insets.total())
        .sum();
    let preferred: f32 = items
        .iter()
        .filter(|item| !item.collapsed)
        .map(|item| item.flex_preferred_main_size)
        .sum();
    let mode = if preferred + noncontent < container_main_size {
        FlexMode::Grow
    } else {
        FlexMode::Shrink
    };

    // Size inflexible items.
    let mut unfrozen_count = 0usize;
    for item in items.iter_mut() {
        item.flex_violation = FlexViolation::None;
        item.scaled_flex_shrink = 0.0;
        if item.collapsed {
            item.used_main_size = 0.0;
            item.frozen = true;
            continue;
        }
        let inflexible = match mode {
            FlexMode::Grow => {
                item.flex_grow <= 0.0 || item.flex_base_size > item.flex_preferred_main_size
            }
            FlexMode::Shrink => {
                item.flex_shrink <= 0.0 || item.flex_base_size < item.flex_preferred_main_size
            }
        };
        if inflexible {
            item.used_main_size = item.flex_preferred_main_size;
            item.frozen = true;
        } else {
            item.used_main_size = item.flex_base_size;
            item.frozen = false;
            unfrozen_count += 1;
        }
    }

    let initial_free_space = container_main_size - space_needed(items, noncontent);
    debug!(
        target: "css::flexbox::flex",
        "[FLEX-RESOLVE] mode={mode:?} items={} unfrozen={unfrozen_count} container_main={container_main_size:.3} initial_free={initial_free_space:.3}",
        items.len()
    );

    // Each pass freezes at least one item, so the count bounds the loop.
    for pass in 0..=items.len() {
        if unfrozen_count == 0 {
            break;
        }
        let flex_factor_sum: f32 = items
            .iter()
            .filter(|item| !item.frozen)
            .map(|item| match mode {
                FlexMode::Grow => item.flex_grow,
                FlexMode::Shrink => item.flex_shrink,
            })
            .sum();

        let mut remaining_free_space = container_main_size - space_needed(items, noncontent);
        if flex_factor_sum < 1.0 {
            let scaled = initial_free_space * flex_factor_sum;
            if scaled.abs() < remaining_free_space.abs() {
                remaining_free_space = scaled;
            }
        }

        match mode {
            FlexMode::Grow => distribute_grow(items, remaining_free_space, flex_factor_sum),
            FlexMode::Shrink => distribute_shrink(items, remaining_free_space),
        }

        let (total_violation, any_violation) = fix_violations(items);
        let frozen_now = freeze_violations(items, total_violation, any_violation);
        unfrozen_count = unfrozen_count.saturating_sub(frozen_now);
        trace!(
            target: "css::flexbox::flex",
            "[FLEX-RESOLVE] pass={pass} free={remaining_free_space:.3} violation={total_violation:.3} froze={frozen_now} unfrozen={unfrozen_count}"
        );
    }
}

/// Insets plus used sizes of frozen items plus base sizes of unfrozen ones.
fn space_needed(items: &[FlexItem], noncontent: f32) -> f32 {
    noncontent
        + items
            .iter()
            .filter(|item| !item.collapsed)
            .map(|item| {
                if item.frozen {
                    item.used_main_size
                } else {
                    item.flex_base_size
                }
            })
            .sum::<f32>()
}

/// Hand out `free_space` in proportion to the grow factors of unfrozen items.
fn distribute_grow(items: &mut [FlexItem], free_space: f32, flex_factor_sum: f32) {
    if flex_factor_sum <= 0.0 {
        return;
    }
    for item in items.iter_mut().filter(|item| !item.frozen) {
        item.used_main_size = item.flex_base_size + free_space * (item.flex_grow / flex_factor_sum);
    }
}

/// Take `|free_space|` away in proportion to shrink factor times base size.
fn distribute_shrink(items: &mut [FlexItem], free_space: f32) {
    let mut scaled_flex_shrink_sum = 0.0f32;
    for item in items.iter_mut().filter(|item| !item.frozen) {
        item.scaled_flex_shrink = item.flex_shrink * item.flex_base_size;
        scaled_flex_shrink_sum += item.scaled_flex_shrink;
    }
    for item in items.iter_mut().filter(|item| !item.frozen) {
        item.used_main_size = if scaled_flex_shrink_sum > 0.0 {
            item.flex_base_size
                - (free_space * (item.scaled_flex_shrink / scaled_flex_shrink_sum)).abs()
        } else {
            item.flex_base_size
        };
    }
}

/// Clamp unfrozen items to their min/max (and zero), recording which bound each one hit.
///
/// Returns the signed sum of `clamped - unclamped` and whether any item was clamped.
fn fix_violations(items: &mut [FlexItem]) -> (f32, bool) {
    let mut total_violation = 0.0f32;
    let mut any_violation = false;
    for item in items.iter_mut().filter(|item| !item.frozen) {
        let unclamped_size = item.used_main_size;
        let clamped_size =
            clamp_to_bounds(unclamped_size, item.min_main_size, item.max_main_size).max(0.0);
        item.flex_violation = if clamped_size < unclamped_size {
            FlexViolation::MaxViolation
        } else if clamped_size > unclamped_size {
            FlexViolation::MinViolation
        } else {
            FlexViolation::None
        };
        any_violation |= item.flex_violation != FlexViolation::None;
        item.used_main_size = clamped_size;
        total_violation += clamped_size - unclamped_size;
    }
    (total_violation, any_violation)
}

/// Freeze min-violated items when the total is positive, max-violated ones when negative, and
/// every unfrozen item when nothing was clamped. Returns how many items were frozen.
///
/// These are the CSS signs. Swapping them never freezes a lone min violator and the loop stops
/// making progress (DESIGN.md, freeze rule).
fn freeze_violations(items: &mut [FlexItem], total_violation: f32, any_violation: bool) -> usize {
    let mut frozen_now = 0usize;
    for item in items.iter_mut().filter(|item| !item.frozen) {
        let freeze = !any_violation
            || (total_violation >= 0.0 && item.flex_violation == FlexViolation::MinViolation)
            || (total_violation <= 0.0 && item.flex_violation == FlexViolation::MaxViolation);
        if freeze {
            item.frozen = true;
            frozen_now += 1;
        }
    }
    frozen_now
}
