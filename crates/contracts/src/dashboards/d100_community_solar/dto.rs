use serde::{Deserialize, Serialize};

/// Headline numbers shown on the dashboard metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityMetrics {
    /// Total energy generated, kWh
    pub total_energy_generated: i64,
    /// Revenue pool, USD
    pub revenue_pool: i64,
    pub community_tokens: i64,
    pub members: u32,
    /// Daily savings, USD
    pub daily_savings: i64,
    /// Panel efficiency, percent
    pub efficiency: u8,
}

/// One row of the community members table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityMember {
    pub name: String,
    /// Display-truncated wallet address (e.g. "0x4a...f92")
    pub wallet: String,
    pub tokens: u32,
    /// Ownership share, percent
    pub share: f64,
    /// Revenue paid out, USD
    pub revenue: i64,
}

/// Connected wallet shown in the wallet dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    /// Short form used by the header badge
    pub short_address: String,
    pub balance: String,
    pub tokens: String,
}

/// Metric categories that open a drill-down dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Energy,
    Revenue,
    Tokens,
}

impl MetricKind {
    pub fn all() -> [MetricKind; 3] {
        [MetricKind::Energy, MetricKind::Revenue, MetricKind::Tokens]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Energy => "energy",
            MetricKind::Revenue => "revenue",
            MetricKind::Tokens => "tokens",
        }
    }
}

/// Period selector state. Purely visual: no series depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "7d")]
    SevenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "1y")]
    OneYear,
}

impl Timeframe {
    pub fn all() -> [Timeframe; 3] {
        [Timeframe::SevenDays, Timeframe::ThirtyDays, Timeframe::OneYear]
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::SevenDays => "7d",
            Timeframe::ThirtyDays => "30d",
            Timeframe::OneYear => "1y",
        }
    }
}

/// Weekly energy production point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPoint {
    pub name: String,
    pub energy: f64,
    pub efficiency: f64,
}

/// Monthly revenue vs. expenses point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub name: String,
    pub revenue: f64,
    pub expenses: f64,
}

/// One slice of the token distribution pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSlice {
    pub name: String,
    pub value: f64,
    /// CSS color, e.g. "#FD105E"
    pub color: String,
}

/// Series bundled with the chart type that renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "series")]
pub enum ChartData {
    Line(Vec<EnergyPoint>),
    Bar(Vec<RevenuePoint>),
    Pie(Vec<TokenSlice>),
}

/// Summary tile under a drill-down chart. All fields are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: String,
    pub trend: String,
}

impl StatItem {
    pub fn new(label: &str, value: &str, trend: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            trend: trend.to_string(),
        }
    }
}

/// Everything the drill-down dialog shows for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDetail {
    pub kind: MetricKind,
    pub title: String,
    /// Icon name understood by the frontend icon set
    pub icon: String,
    pub chart: ChartData,
    pub stats: [StatItem; 3],
}
