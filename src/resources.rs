//! Per-tool scheduler resource requests
//!

use std::collections::BTreeMap;

use camino::Utf8Path;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use simple_error::{SimpleResult, bail, map_err_with};

use crate::tool::{EnumCount, IntoEnumIterator, Tool};

/// Lowest total memory (GB) any submitted job may request across all of its slots
pub const MIN_EFFECTIVE_MEMORY_GB: u32 = 14;

/// Highest total memory (GB) a configured profile may request across all of its slots
pub const MAX_EFFECTIVE_MEMORY_GB: u32 = 4096;

/// Memory and slot request for one job
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceProfile {
    /// Virtual memory per slot, in GB
    pub memory_gb: u32,

    /// Number of slots requested in the parallel environment
    pub parallelism: u32,
}

impl ResourceProfile {
    pub const fn new(memory_gb: u32, parallelism: u32) -> Self {
        Self {
            memory_gb,
            parallelism,
        }
    }

    /// Total memory over all slots, saturating at `u32::MAX`
    pub fn effective_memory_gb(&self) -> u32 {
        self.memory_gb.saturating_mul(self.parallelism.max(1))
    }

    /// Raise per-slot memory so that the total meets `min_total_gb`, parallelism is unchanged
    pub fn with_memory_floor(self, min_total_gb: u32) -> Self {
        let parallelism = self.parallelism.max(1);
        if self.effective_memory_gb() >= min_total_gb {
            return self;
        }
        Self {
            memory_gb: min_total_gb.div_ceil(parallelism),
            parallelism,
        }
    }
}

/// Immutable lookup from every tool class to its resource profile
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceTable {
    profiles: [ResourceProfile; Tool::COUNT],
}

impl Default for ResourceTable {
    fn default() -> Self {
        let mut profiles = [ResourceProfile::new(MIN_EFFECTIVE_MEMORY_GB, 1); Tool::COUNT];
        for tool in Tool::iter() {
            profiles[tool as usize] = default_profile(tool);
        }
        Self { profiles }
    }
}

fn default_profile(tool: Tool) -> ResourceProfile {
    match tool {
        Tool::Align => ResourceProfile::new(4, 4),
        Tool::Index => ResourceProfile::new(14, 1),
        Tool::Sort => ResourceProfile::new(7, 2),
        Tool::Dedupe => ResourceProfile::new(8, 2),
        Tool::Recalibrate => ResourceProfile::new(4, 4),
        Tool::Realign => ResourceProfile::new(7, 2),
        Tool::CallVariants => ResourceProfile::new(4, 4),
        Tool::Coverage => ResourceProfile::new(7, 2),
    }
}

fn check_profile(tool: Tool, profile: &ResourceProfile) -> SimpleResult<()> {
    if profile.memory_gb == 0 {
        bail!(
            "Resource profile for '{}' must request more than 0 GB of memory",
            tool
        );
    }
    if profile.parallelism == 0 {
        bail!("Resource profile for '{}' must request at least 1 slot", tool);
    }
    match profile.memory_gb.checked_mul(profile.parallelism) {
        Some(total) if total <= MAX_EFFECTIVE_MEMORY_GB => {}
        _ => bail!(
            "Resource profile for '{}' requests {} slots x {}G, more than the {}G job maximum",
            tool,
            profile.parallelism,
            profile.memory_gb,
            MAX_EFFECTIVE_MEMORY_GB
        ),
    }
    Ok(())
}

impl ResourceTable {
    /// Build a table from a complete tool to profile map
    ///
    pub fn from_profiles(profiles: &BTreeMap<Tool, ResourceProfile>) -> SimpleResult<Self> {
        let mut table = Self::default();
        for tool in Tool::iter() {
            let Some(profile) = profiles.get(&tool) else {
                bail!("Resource table is missing a profile for '{}'", tool);
            };
            check_profile(tool, profile)?;
            table.profiles[tool as usize] = *profile;
        }
        Ok(table)
    }

    /// Copy of the default table with the given profiles replaced
    ///
    pub fn with_overrides(overrides: &BTreeMap<Tool, ResourceProfile>) -> SimpleResult<Self> {
        let mut profiles = Self::default().to_map();
        for (tool, profile) in overrides.iter() {
            profiles.insert(*tool, *profile);
        }
        Self::from_profiles(&profiles)
    }

    /// Parse resource overrides from a JSON object keyed on tool name
    ///
    /// Tools which are not listed keep their default profile.
    ///
    pub fn from_json_str(json: &str) -> SimpleResult<Self> {
        let overrides: BTreeMap<Tool, ResourceProfile> = map_err_with!(
            serde_json::from_str(json),
            "Unable to parse resource configuration"
        )?;
        for (tool, profile) in overrides.iter() {
            debug!(
                "Resource override for {tool}: {} slots x {}G",
                profile.parallelism, profile.memory_gb
            );
        }
        Self::with_overrides(&overrides)
    }

    pub fn from_json_file(filename: &Utf8Path) -> SimpleResult<Self> {
        info!("Reading resource configuration from file: '{filename}'");

        let json = map_err_with!(
            std::fs::read_to_string(filename),
            "Unable to read resource configuration file: '{}'",
            filename
        )?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, tool: Tool) -> &ResourceProfile {
        &self.profiles[tool as usize]
    }

    /// Profile for `tool` raised to the minimum effective memory if needed
    ///
    pub fn effective_profile(&self, tool: Tool) -> ResourceProfile {
        let profile = *self.get(tool);
        let raised = profile.with_memory_floor(MIN_EFFECTIVE_MEMORY_GB);
        if raised != profile {
            debug!(
                "Raising {tool} memory request from {}G to {}G per slot to meet the {}G job minimum",
                profile.memory_gb, raised.memory_gb, MIN_EFFECTIVE_MEMORY_GB
            );
        }
        raised
    }

    pub fn to_map(&self) -> BTreeMap<Tool, ResourceProfile> {
        Tool::iter().map(|tool| (tool, *self.get(tool))).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_map())
    }
}
