//! Hardcoded sample data for the community solar dashboard.
//!
//! Every function builds a fresh owned value from literals; nothing here is
//! derived from anything else.

use super::dto::*;

pub const ENERGY_COLOR: &str = "#FD105E";
pub const EXPENSES_COLOR: &str = "#474747";

pub fn community_metrics() -> CommunityMetrics {
    CommunityMetrics {
        total_energy_generated: 45_680,
        revenue_pool: 12_450,
        community_tokens: 8_950,
        members: 127,
        daily_savings: 340,
        efficiency: 94,
    }
}

pub fn community_members() -> Vec<CommunityMember> {
    let member = |name: &str, wallet: &str, tokens: u32, share: f64, revenue: i64| {
        CommunityMember {
            name: name.to_string(),
            wallet: wallet.to_string(),
            tokens,
            share,
            revenue,
        }
    };

    vec![
        member("Anita Chen", "0x4a...f92", 450, 4.5, 1200),
        member("Marcus Rodriguez", "0x8b...d14", 320, 3.2, 890),
        member("Sarah Johnson", "0x2c...a56", 680, 6.8, 1850),
        member("David Kim", "0x5f...b78", 290, 2.9, 760),
    ]
}

pub fn wallet_info() -> WalletInfo {
    WalletInfo {
        address: "0x4a7B2c9f8D1e3A5F7C9B2E4A6D8F1A3C5E7B9D2F".to_string(),
        short_address: "0x4a...D9f".to_string(),
        balance: "2.456 AVAX".to_string(),
        tokens: "450 SOLAR".to_string(),
    }
}

pub fn energy_series() -> Vec<EnergyPoint> {
    [
        ("Week 1", 2400.0, 94.0),
        ("Week 2", 2210.0, 92.0),
        ("Week 3", 2290.0, 95.0),
        ("Week 4", 2000.0, 89.0),
    ]
    .into_iter()
    .map(|(name, energy, efficiency)| EnergyPoint {
        name: name.to_string(),
        energy,
        efficiency,
    })
    .collect()
}

pub fn revenue_series() -> Vec<RevenuePoint> {
    [
        ("Jan", 2400.0, 1800.0),
        ("Feb", 2210.0, 1600.0),
        ("Mar", 2290.0, 1700.0),
        ("Apr", 2180.0, 1650.0),
    ]
    .into_iter()
    .map(|(name, revenue, expenses)| RevenuePoint {
        name: name.to_string(),
        revenue,
        expenses,
    })
    .collect()
}

pub fn token_distribution() -> Vec<TokenSlice> {
    vec![
        TokenSlice {
            name: "Active Members".to_string(),
            value: 85.0,
            color: ENERGY_COLOR.to_string(),
        },
        TokenSlice {
            name: "Reserved Pool".to_string(),
            value: 15.0,
            color: EXPENSES_COLOR.to_string(),
        },
    ]
}

/// Canned drill-down bundle for a metric card.
pub fn metric_detail(kind: MetricKind) -> MetricDetail {
    match kind {
        MetricKind::Energy => MetricDetail {
            kind,
            title: "Energy Generation Analytics".to_string(),
            icon: "zap".to_string(),
            chart: ChartData::Line(energy_series()),
            stats: [
                StatItem::new("Peak Generation", "2,400 kWh", "+12%"),
                StatItem::new("Average Efficiency", "92.5%", "+3%"),
                StatItem::new("Carbon Offset", "1.2 tons", "+15%"),
            ],
        },
        MetricKind::Revenue => MetricDetail {
            kind,
            title: "Revenue Pool Analytics".to_string(),
            icon: "dollar-sign".to_string(),
            chart: ChartData::Bar(revenue_series()),
            stats: [
                StatItem::new("Total Revenue", "$12,450", "+8%"),
                StatItem::new("Operating Costs", "$6,750", "-2%"),
                StatItem::new("Net Profit", "$5,700", "+18%"),
            ],
        },
        MetricKind::Tokens => MetricDetail {
            kind,
            title: "Community Token Distribution".to_string(),
            icon: "users".to_string(),
            chart: ChartData::Pie(token_distribution()),
            stats: [
                StatItem::new("Active Members", "127", "+5%"),
                StatItem::new("Token Holders", "95", "+12%"),
                StatItem::new("Avg. Holding", "94 tokens", "+3%"),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_in_given_order() {
        let members = community_members();
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Anita Chen", "Marcus Rodriguez", "Sarah Johnson", "David Kim"]
        );
    }

    #[test]
    fn test_member_values() {
        let members = community_members();
        assert_eq!(members.len(), 4);

        let sarah = &members[2];
        assert_eq!(sarah.wallet, "0x2c...a56");
        assert_eq!(sarah.tokens, 680);
        assert_eq!(sarah.share, 6.8);
        assert_eq!(sarah.revenue, 1850);

        let totals: (u32, i64) = members
            .iter()
            .fold((0, 0), |(t, r), m| (t + m.tokens, r + m.revenue));
        assert_eq!(totals, (1740, 4700));
    }

    #[test]
    fn test_metric_detail_per_kind() {
        let energy = metric_detail(MetricKind::Energy);
        assert_eq!(energy.title, "Energy Generation Analytics");
        assert_eq!(energy.icon, "zap");
        assert!(matches!(energy.chart, ChartData::Line(_)));
        assert_eq!(energy.stats[0], StatItem::new("Peak Generation", "2,400 kWh", "+12%"));

        let revenue = metric_detail(MetricKind::Revenue);
        assert_eq!(revenue.title, "Revenue Pool Analytics");
        assert_eq!(revenue.icon, "dollar-sign");
        assert!(matches!(revenue.chart, ChartData::Bar(_)));
        assert_eq!(revenue.stats[1].trend, "-2%");

        let tokens = metric_detail(MetricKind::Tokens);
        assert_eq!(tokens.title, "Community Token Distribution");
        assert_eq!(tokens.icon, "users");
        assert!(matches!(tokens.chart, ChartData::Pie(_)));
        assert_eq!(tokens.stats[2].value, "94 tokens");
    }

    #[test]
    fn test_metric_detail_kind_matches_request() {
        for kind in MetricKind::all() {
            assert_eq!(metric_detail(kind).kind, kind);
        }
    }

    #[test]
    fn test_token_distribution_sums_to_hundred() {
        let total: f64 = token_distribution().iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_wallet_literal() {
        let wallet = wallet_info();
        assert_eq!(wallet.address, "0x4a7B2c9f8D1e3A5F7C9B2E4A6D8F1A3C5E7B9D2F");
        assert_eq!(wallet.balance, "2.456 AVAX");
        assert_eq!(wallet.tokens, "450 SOLAR");
    }

    #[test]
    fn test_timeframe_default_and_serde_labels() {
        assert_eq!(Timeframe::default(), Timeframe::ThirtyDays);
        assert_eq!(serde_json::to_string(&Timeframe::OneYear).unwrap(), "\"1y\"");
        for tf in Timeframe::all() {
            let json = serde_json::to_string(&tf).unwrap();
            assert_eq!(json, format!("\"{}\"", tf.label()));
        }
    }
}
