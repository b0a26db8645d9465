//! Structural steps run after the rule list.
//!
//! These cover values that change shape on the way through (arrays of
//! business-hour ranges, IVR menus) and derived fields such as the site
//! code. A step never overwrites a target that a rule already wrote.

use super::{auto_receptionist, call_queue, ivr, site, user};
use crate::mapping::{MappingOutcome, path};
use log::debug;
use serde_json::{Map, Value};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralStep {
    /// Weekly range object to Zoom `custom_hours_settings`
    WeeklyHoursToZoom {
        sources: &'static [&'static str],
        target: &'static str,
    },
    /// Zoom `custom_hours_settings` back to a weekly range object
    WeeklyHoursFromZoom {
        source: &'static str,
        target: &'static str,
    },
    /// Per-day `{day}_hours: [from, to]` fields to Zoom `custom_hours_settings`
    DayHoursToZoom { target: &'static str },
    /// RingCentral IVR action list to Zoom `ivr_actions`
    VendorIvrActions {
        sources: &'static [&'static str],
        target: &'static str,
    },
    /// Dialpad `routing_options` DTMF menus to Zoom `ivr_actions`, closed by
    /// a timeout entry taken from `fallback_action`
    DialpadRouting {
        source: &'static str,
        fallback_action: &'static str,
        target: &'static str,
    },
    /// SSOT `menu_options` to Zoom `ivr_actions`
    MenuOptionsToZoom {
        source: &'static str,
        target: &'static str,
    },
    /// Zoom `ivr_actions` to SSOT `menu_options`
    MenuOptionsFromZoom {
        source: &'static str,
        target: &'static str,
    },
    /// Derive a site code from the site name
    SiteCode {
        source: &'static str,
        target: &'static str,
    },
    /// Stable extension number in `[base, base + 100)` derived from the record id
    GeneratedExtension {
        sources: &'static [&'static str],
        base: u16,
        target: &'static str,
    },
    /// `[{type, number}]` to Zoom phone number entries
    PhoneNumbersToZoom {
        source: &'static str,
        target: &'static str,
    },
    /// Join the already mapped first and last names
    DisplayName {
        first: &'static str,
        last: &'static str,
        target: &'static str,
    },
}

impl StructuralStep {
    fn target(&self) -> &'static str {
        match self {
            StructuralStep::WeeklyHoursToZoom { target, .. }
            | StructuralStep::WeeklyHoursFromZoom { target, .. }
            | StructuralStep::DayHoursToZoom { target }
            | StructuralStep::VendorIvrActions { target, .. }
            | StructuralStep::DialpadRouting { target, .. }
            | StructuralStep::MenuOptionsToZoom { target, .. }
            | StructuralStep::MenuOptionsFromZoom { target, .. }
            | StructuralStep::SiteCode { target, .. }
            | StructuralStep::GeneratedExtension { target, .. }
            | StructuralStep::PhoneNumbersToZoom { target, .. }
            | StructuralStep::DisplayName { target, .. } => *target,
        }
    }

    fn sources(&self) -> &[&'static str] {
        match self {
            StructuralStep::WeeklyHoursToZoom { sources, .. }
            | StructuralStep::VendorIvrActions { sources, .. }
            | StructuralStep::GeneratedExtension { sources, .. } => *sources,
            StructuralStep::WeeklyHoursFromZoom { source, .. }
            | StructuralStep::DialpadRouting { source, .. }
            | StructuralStep::MenuOptionsToZoom { source, .. }
            | StructuralStep::MenuOptionsFromZoom { source, .. }
            | StructuralStep::SiteCode { source, .. }
            | StructuralStep::PhoneNumbersToZoom { source, .. } => std::slice::from_ref(source),
            StructuralStep::DayHoursToZoom { .. } | StructuralStep::DisplayName { .. } => &[],
        }
    }

    /// Input value for this step and the top-level source keys it reads.
    fn gather<'a>(&self, source: &'a Map<String, Value>) -> Option<(Vec<String>, Cow<'a, Value>)> {
        match self {
            StructuralStep::DayHoursToZoom { .. } => {
                let (keys, weekly) = call_queue::day_hours_to_weekly(source)?;
                Some((keys, Cow::Owned(weekly)))
            }
            StructuralStep::DisplayName { .. } => None,
            _ => {
                let (source_path, input) = self.sources().iter().find_map(|candidate| {
                    path::lookup(source, candidate).map(|value| (*candidate, value))
                })?;
                let mut roots = vec![path::root_key(source, source_path).to_string()];
                if let StructuralStep::DialpadRouting { fallback_action, .. } = self {
                    if path::contains(source, fallback_action) {
                        roots.push(path::root_key(source, fallback_action).to_string());
                    }
                }
                Some((roots, Cow::Borrowed(input)))
            }
        }
    }

    pub(super) fn apply(&self, source: &Map<String, Value>, outcome: &mut MappingOutcome, context: &str) {
        let target = self.target();

        if let StructuralStep::DisplayName { first, last, .. } = self {
            if path::contains(&outcome.record, target) {
                return;
            }
            let name = user::display_name(
                path::lookup(&outcome.record, first),
                path::lookup(&outcome.record, last),
            );
            if let Some(name) = name {
                path::assign(&mut outcome.record, target, name);
                outcome.rules_applied += 1;
            }
            return;
        }

        let Some((roots, input)) = self.gather(source) else {
            return;
        };

        if path::contains(&outcome.record, target) {
            outcome.consumed.extend(roots);
            return;
        }

        let input: &Value = &input;
        let produced = match self {
            StructuralStep::WeeklyHoursToZoom { .. } | StructuralStep::DayHoursToZoom { .. } => {
                call_queue::weekly_ranges_to_zoom(input)
            }
            StructuralStep::WeeklyHoursFromZoom { .. } => call_queue::weekly_ranges_from_zoom(input),
            StructuralStep::VendorIvrActions { .. } => ivr::vendor_actions_to_zoom(input, context),
            StructuralStep::DialpadRouting { fallback_action, .. } => ivr::dialpad_routing_to_zoom(
                input,
                path::lookup(source, fallback_action),
                context,
            ),
            StructuralStep::MenuOptionsToZoom { .. } => ivr::menu_options_to_zoom(input, context),
            StructuralStep::MenuOptionsFromZoom { .. } => ivr::menu_options_from_zoom(input, context),
            StructuralStep::SiteCode { .. } => site::site_code(input),
            StructuralStep::GeneratedExtension { base, .. } => {
                auto_receptionist::generated_extension(input, *base)
            }
            StructuralStep::PhoneNumbersToZoom { .. } => user::phone_numbers_to_zoom(input),
            StructuralStep::DisplayName { .. } => None,
        };

        match produced {
            Some(value) => {
                path::assign(&mut outcome.record, target, value);
                outcome.consumed.extend(roots);
                outcome.rules_applied += 1;
            }
            None => debug!("{}: nothing usable in {:?} for '{}'", context, roots, target),
        }
    }
}
