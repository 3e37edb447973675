/// Profit model section: referral commission split and cost structure
use iced::widget::{column, container, row, text, Column, Space};
use iced::{Color, Element, Length};

use super::{palette, styles, BOLD};
use crate::Message;

/// Referral commission on a single ambassador order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionModel {
    /// Order value in yuan
    pub base_order: u64,
    /// Direct referrer share, in percent
    pub direct_pct: u64,
    /// Upline (indirect referrer) share, in percent
    pub indirect_pct: u64,
}

impl Default for CommissionModel {
    fn default() -> Self {
        Self {
            base_order: 20_000,
            direct_pct: 20,
            indirect_pct: 5,
        }
    }
}

impl CommissionModel {
    pub fn direct(&self) -> u64 {
        self.base_order * self.direct_pct / 100
    }

    pub fn indirect(&self) -> u64 {
        self.base_order * self.indirect_pct / 100
    }

    /// What stays with headquarters, supply chain and margin
    pub fn company(&self) -> u64 {
        self.base_order - self.direct() - self.indirect()
    }

    /// Total distribution commission, in percent
    pub fn payout_pct(&self) -> u64 {
        self.direct_pct + self.indirect_pct
    }
}

/// Cost structure rows as (label, percent, color)
pub const COST_STRUCTURE: &[(&str, u16, Color)] = &[
    ("营销激励成本", 25, palette::RED),
    ("货品生产及研发", 35, palette::JADE),
    ("平台运营及毛利", 40, palette::GOLD),
];

/// Format a yuan amount with thousands separators, e.g. `¥20,000`
pub fn format_yuan(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("¥{}", grouped)
}

/// Horizontal bar filled to `percent` of the row
fn meter<'a>(percent: u16, color: Color) -> Element<'a, Message> {
    let filled = container(Space::with_height(12))
        .width(Length::FillPortion(percent.max(1)))
        .style(styles::fill(color, 6.0));
    let rest = Space::with_width(Length::FillPortion(100u16.saturating_sub(percent).max(1)));

    container(row![filled, rest])
        .width(Length::Fill)
        .style(styles::fill(palette::LINE, 6.0))
        .into()
}

fn stat<'a>(label: &'a str, value: String, color: Color) -> Element<'a, Message> {
    container(
        column![
            text(label).size(12).color(palette::SUB),
            text(value).size(24).font(BOLD).color(color),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(styles::fill(palette::BG, 12.0))
    .into()
}

pub fn view<'a>(model: CommissionModel) -> Element<'a, Message> {
    let split = [
        (format!("C (传播大使直推) {}%", model.direct_pct), model.direct(), palette::JADE),
        (format!("B (上级间推) {}%", model.indirect_pct), model.indirect(), palette::BLUE),
        ("总公司/供应链/毛利".to_string(), model.company(), palette::MUTED),
    ];

    let split_rows = split.into_iter().map(|(label, amount, color)| {
        let share = (amount * 100 / model.base_order.max(1)) as u16;
        column![
            row![
                text(label).size(13).color(palette::INK),
                Space::with_width(Length::Fill),
                text(format_yuan(amount)).size(13).font(BOLD).color(color),
            ],
            meter(share, color),
        ]
        .spacing(6)
        .into()
    });

    let commission = container(
        column![
            row![
                text("裂变分润收益看板").size(22).font(BOLD).color(palette::INK),
                Space::with_width(Length::Fill),
                text(format!("Base: {} Order", format_yuan(model.base_order)))
                    .size(11)
                    .color(palette::SUB),
            ],
            Column::with_children(split_rows).spacing(16),
            row![
                stat("直推收益", format_yuan(model.direct()), palette::JADE),
                stat("间推收益", format_yuan(model.indirect()), palette::BLUE),
            ]
            .spacing(16),
        ]
        .spacing(24),
    )
    .padding(36)
    .width(Length::FillPortion(1))
    .style(styles::card);

    let cost_rows = COST_STRUCTURE.iter().map(|&(label, percent, color)| {
        column![
            row![
                text(label).size(14).font(BOLD).color(palette::INK),
                Space::with_width(Length::Fill),
                text(format!("{}%", percent)).size(14).font(BOLD).color(color),
            ],
            meter(percent, color),
        ]
        .spacing(8)
        .into()
    });

    let margins = container(
        column![
            text("综合毛利率分析").size(22).font(BOLD).color(palette::INK),
            text(format!(
                "分销佣金封顶{}%，总部保留极致供应链弹性。",
                model.payout_pct()
            ))
            .size(14)
            .color(palette::SUB),
            Column::with_children(cost_rows).spacing(20),
        ]
        .spacing(24),
    )
    .padding(36)
    .width(Length::FillPortion(1))
    .style(styles::card);

    row![commission, margins].spacing(32).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_commission_split() {
        let model = CommissionModel::default();
        assert_eq!(model.direct(), 4_000);
        assert_eq!(model.indirect(), 1_000);
        assert_eq!(model.company(), 15_000);
        assert_eq!(model.payout_pct(), 25);
    }

    #[test]
    fn test_cost_structure_sums_to_whole() {
        let total: u16 = COST_STRUCTURE.iter().map(|(_, pct, _)| pct).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_format_yuan() {
        assert_eq!(format_yuan(0), "¥0");
        assert_eq!(format_yuan(999), "¥999");
        assert_eq!(format_yuan(4_000), "¥4,000");
        assert_eq!(format_yuan(30_000_000), "¥30,000,000");
    }
}
