// System-resource normalization: one raw record in, ordered display rows out.

pub mod format;

use crate::models::{FieldValue, RawRecord, StatusEntry};
use format::{Formatted, Formatter};

/// System-resource fields with a localized label and a dedicated formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    Uptime,
    Version,
    CpuLoad,
    CpuCount,
    CpuFrequency,
    FreeMemory,
    TotalMemory,
    FreeHddSpace,
    TotalHddSpace,
    ArchitectureName,
    BoardName,
    Platform,
}

impl StatusField {
    pub const ALL: [StatusField; 12] = [
        StatusField::Uptime,
        StatusField::Version,
        StatusField::CpuLoad,
        StatusField::CpuCount,
        StatusField::CpuFrequency,
        StatusField::FreeMemory,
        StatusField::TotalMemory,
        StatusField::FreeHddSpace,
        StatusField::TotalHddSpace,
        StatusField::ArchitectureName,
        StatusField::BoardName,
        StatusField::Platform,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Field name as the device reports it.
    pub fn key(self) -> &'static str {
        match self {
            StatusField::Uptime => "uptime",
            StatusField::Version => "version",
            StatusField::CpuLoad => "cpu-load",
            StatusField::CpuCount => "cpu-count",
            StatusField::CpuFrequency => "cpu-frequency",
            StatusField::FreeMemory => "free-memory",
            StatusField::TotalMemory => "total-memory",
            StatusField::FreeHddSpace => "free-hdd-space",
            StatusField::TotalHddSpace => "total-hdd-space",
            StatusField::ArchitectureName => "architecture-name",
            StatusField::BoardName => "board-name",
            StatusField::Platform => "platform",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusField::Uptime => "运行时间",
            StatusField::Version => "系统版本",
            StatusField::CpuLoad => "CPU负载",
            StatusField::CpuCount => "CPU数量",
            StatusField::CpuFrequency => "CPU频率",
            StatusField::FreeMemory => "可用内存",
            StatusField::TotalMemory => "总内存",
            StatusField::FreeHddSpace => "可用硬盘空间",
            StatusField::TotalHddSpace => "总硬盘空间",
            StatusField::ArchitectureName => "系统架构",
            StatusField::BoardName => "设备型号",
            StatusField::Platform => "平台",
        }
    }

    pub fn formatter(self) -> Formatter {
        match self {
            StatusField::Uptime => format::uptime,
            StatusField::CpuLoad => format::percent,
            StatusField::CpuFrequency => format::megahertz,
            StatusField::FreeMemory
            | StatusField::TotalMemory
            | StatusField::FreeHddSpace
            | StatusField::TotalHddSpace => format::megabytes,
            StatusField::Version
            | StatusField::CpuCount
            | StatusField::ArchitectureName
            | StatusField::BoardName
            | StatusField::Platform => format::passthrough,
        }
    }
}

/// Localized label for a field name; unknown names are returned unchanged.
pub fn label_for(key: &str) -> &str {
    StatusField::from_key(key).map_or(key, |f| f.label())
}

/// Display string for one field. Unknown fields and formatter fallbacks both
/// yield the raw value.
pub fn format_value(key: &str, value: &FieldValue) -> String {
    let formatter =
        StatusField::from_key(key).map_or(format::passthrough as Formatter, StatusField::formatter);
    match formatter(value) {
        Formatted::Value(s) => s,
        Formatted::UseRawFallback => value.to_string(),
    }
}

/// One row per field, in the record's own field order.
pub fn normalize(record: &RawRecord) -> Vec<StatusEntry> {
    record
        .iter()
        .map(|(key, value)| StatusEntry::new(label_for(key), format_value(key, value)))
        .collect()
}
