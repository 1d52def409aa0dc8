use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::section_header::SectionHeader;
use contracts::dashboards::d100_community_solar::CommunityMember;
use contracts::shared::format::{format_share, initials};
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

/// Display strings of one member row.
struct MemberRow {
    initials: String,
    name: String,
    wallet: String,
    tokens: String,
    share: String,
    revenue: String,
}

fn member_rows(members: Vec<CommunityMember>) -> Vec<MemberRow> {
    members
        .into_iter()
        .map(|m| MemberRow {
            initials: initials(&m.name),
            // Revenue is shown ungrouped ("$1200").
            revenue: format!("${}", m.revenue),
            tokens: m.tokens.to_string(),
            share: format_share(m.share),
            name: m.name,
            wallet: m.wallet,
        })
        .collect()
}

/// Community members with their token holdings and revenue share, in given order.
#[component]
pub fn MembersTable(members: Vec<CommunityMember>) -> impl IntoView {
    view! {
        <CardAnimated class="glass-card members-card" delay_ms=320>
            <SectionHeader
                title="Community Members"
                subtitle="Transparent revenue distribution and ownership".to_string()
            >
                {()}
            </SectionHeader>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Member"</TableHeaderCell>
                            <TableHeaderCell>"Wallet"</TableHeaderCell>
                            <TableHeaderCell>"Tokens"</TableHeaderCell>
                            <TableHeaderCell>"Share"</TableHeaderCell>
                            <TableHeaderCell>"Revenue"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {member_rows(members)
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="member-cell">
                                                    <span class="member-cell__avatar">
                                                        {row.initials}
                                                    </span>
                                                    <span class="member-cell__name">{row.name}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Outline>
                                                <span class="mono">{row.wallet}</span>
                                            </Badge>
                                        </TableCell>
                                        <TableCell>
                                            <span class="members-table__tokens">{row.tokens}</span>
                                        </TableCell>
                                        <TableCell>{row.share}</TableCell>
                                        <TableCell>
                                            <span class="members-table__revenue">
                                                {row.revenue}
                                            </span>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_community_solar::sample::community_members;

    #[test]
    fn test_member_rows_render_given_values() {
        let rows = member_rows(community_members());

        let revenue: Vec<&str> = rows.iter().map(|r| r.revenue.as_str()).collect();
        assert_eq!(revenue, vec!["$1200", "$890", "$1850", "$760"]);

        let share: Vec<&str> = rows.iter().map(|r| r.share.as_str()).collect();
        assert_eq!(share, vec!["4.5%", "3.2%", "6.8%", "2.9%"]);

        assert_eq!(rows[0].initials, "AC");
        assert_eq!(rows[1].name, "Marcus Rodriguez");
        assert_eq!(rows[2].wallet, "0x2c...a56");
        assert_eq!(rows[2].tokens, "680");
    }
}
