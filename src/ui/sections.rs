/// Static deck sections: nav bar, hero, ecosystem matrix, footer
///
/// Every block on the page has a fixed height so the scroll-spy can map
/// offsets to sections without measuring the rendered layout.
use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Wrap;

use super::{palette, styles, BOLD};
use crate::state::nav::{NavState, SectionId, SectionLayout};
use crate::Message;

pub const HERO_HEIGHT: f32 = 480.0;
pub const ECOSYSTEM_HEIGHT: f32 = 560.0;
pub const LADDER_HEIGHT: f32 = 1400.0;
pub const MODEL_HEIGHT: f32 = 620.0;
pub const FOOTER_HEIGHT: f32 = 340.0;

/// Page blocks from top to bottom
pub const PAGE_BLOCKS: &[(Option<SectionId>, f32)] = &[
    (None, HERO_HEIGHT),
    (Some(SectionId::Ecosystem), ECOSYSTEM_HEIGHT),
    (Some(SectionId::Ladder), LADDER_HEIGHT),
    (Some(SectionId::Model), MODEL_HEIGHT),
    (None, FOOTER_HEIGHT),
];

pub fn page_layout() -> SectionLayout {
    SectionLayout::stacked(PAGE_BLOCKS)
}

/// Width of the centered content column
pub const CONTENT_WIDTH: f32 = 1120.0;

/// Ecosystem cards as (heading, accent, bullet points)
const ECOSYSTEM_CARDS: &[(&str, Color, [&str; 3])] = &[
    (
        "公域引流 · 流量池",
        palette::JADE,
        [
            "视频号中央直播间：每日12小时不间断交易",
            "小红书/美拍：非遗文化高调性种草矩阵",
            "全员推客：蚂蚁雄兵式的社交关系链渗透",
        ],
    ),
    (
        "线下体验 · 交付场",
        palette::GOLD,
        [
            "非遗生活馆：品牌形象高地与高端量体裁衣",
            "联营合伙店：¥2万超低门槛实现社区化下沉",
            "数字化柜台：线上线下一体化库存，即买即配",
        ],
    ),
    (
        "私域运营 · 价值芯",
        palette::RED,
        [
            "高定俱乐部：黑卡会员专属的高净值社交圈",
            "导师成长营：从普通用户到非遗讲师的养成",
            "数字化结算：透明、即时、激励全流程留痕",
        ],
    ),
];

/// Sticky top bar with the brand mark and section entries
pub fn nav_bar<'a>(nav: &NavState) -> Element<'a, Message> {
    let entries = SectionId::ALL.into_iter().map(|id| {
        button(text(id.title()).size(14).font(BOLD))
            .on_press(Message::NavigateTo(id))
            .padding([8, 12])
            .style(styles::nav_entry(nav.active() == id))
            .into()
    });

    let brand = row![
        container(text("👑").size(16))
            .width(32)
            .height(32)
            .center_x(32)
            .center_y(32)
            .style(styles::fill(palette::RED, 8.0)),
        text("我的搭配师").size(16).font(BOLD).color(palette::INK),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let bar = row![brand, Space::with_width(Length::Fill), Row::with_children(entries).spacing(4)]
        .align_y(Alignment::Center);

    container(container(bar).max_width(CONTENT_WIDTH))
        .padding([12, 24])
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(styles::fill(palette::WHITE, 0.0))
        .into()
}

/// Section title with an accent bar
pub fn section_header<'a>(title: &'a str, subtitle: &'a str, accent: Color) -> Element<'a, Message> {
    column![
        row![
            container(Space::new(6, 30)).style(styles::fill(accent, 0.0)),
            text(title).size(30).font(BOLD).color(palette::INK),
        ]
        .spacing(14)
        .align_y(Alignment::Center),
        text(subtitle).size(15).color(palette::SUB),
    ]
    .spacing(8)
    .into()
}

pub fn hero<'a>() -> Element<'a, Message> {
    let badge = |icon: &'a str, label: &'a str| -> Element<'a, Message> {
        container(row![text(icon).color(palette::GOLD), text(label).size(14)].spacing(10))
            .padding([10, 22])
            .style(styles::fill(palette::faded(palette::WHITE, 0.06), 20.0))
            .into()
    };

    let content = column![
        text("Strategic Operations Refinement 2026")
            .size(13)
            .font(BOLD)
            .color(palette::GOLD),
        text("“我的搭配师”").size(56).font(BOLD),
        text("运营增长与晋升战略").size(56).font(BOLD),
        text("重塑非遗香云纱商业生态：以“七级晋升”为核心，构建从公域流量到终身股东的价值共生闭环。")
            .size(17)
            .color(palette::MUTED),
        Wrap::with_elements(vec![
            badge("👤", "首席运营官 · 战略发布"),
            badge("📅", "执行周期：2026 年度"),
        ])
        .spacing(24.0)
        .line_spacing(12.0),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .max_width(CONTENT_WIDTH);

    container(content)
        .width(Length::Fill)
        .height(HERO_HEIGHT)
        .center_x(Length::Fill)
        .center_y(HERO_HEIGHT)
        .style(styles::band)
        .into()
}

pub fn ecosystem<'a>() -> Element<'a, Message> {
    let cards = ECOSYSTEM_CARDS
        .iter()
        .map(|&(heading, accent, points)| {
            let bullets = points.into_iter().map(|point| {
                row![text("✓").color(accent), text(point).size(14).color(palette::SUB)]
                    .spacing(10)
                    .into()
            });

            container(
                column![
                    text(heading).size(20).font(BOLD).color(palette::INK),
                    Column::with_children(bullets).spacing(14),
                ]
                .spacing(20),
            )
            .padding(28)
            .width(Length::Fixed(320.0))
            .style(styles::fill(palette::BG, 16.0))
            .into()
        })
        .collect();

    let body = column![
        section_header("全域生态矩阵", "构建从短视频引流到实体馆沉淀的深度增长模型", palette::RED),
        Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
    ]
    .spacing(36);

    page_block(container(body).padding(40).width(Length::Fill).style(styles::card), ECOSYSTEM_HEIGHT)
}

pub fn footer<'a>() -> Element<'a, Message> {
    let content = column![
        container(Space::new(64, 4)).style(styles::fill(palette::GOLD, 0.0)),
        text("我的搭配师").size(36).font(BOLD),
        text("中国非遗香云纱 · 全域商业生态领航者").size(17).color(palette::MUTED),
        row![
            text("© 2026 OPERATIONS STRATEGY DEPT."),
            text("SHANGHAI HEADQUARTERS"),
            text("CONFIDENTIAL"),
        ]
        .spacing(48),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(FOOTER_HEIGHT)
        .center_x(Length::Fill)
        .center_y(FOOTER_HEIGHT)
        .style(styles::band)
        .into()
}

/// Wrap section content in its fixed-height, centered slot
pub fn page_block<'a>(content: impl Into<Element<'a, Message>>, height: f32) -> Element<'a, Message> {
    container(container(content).max_width(CONTENT_WIDTH))
        .padding([24, 24])
        .width(Length::Fill)
        .height(height)
        .center_x(Length::Fill)
        .clip(true)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout_covers_rendered_sections() {
        let layout = page_layout();
        for id in [SectionId::Ecosystem, SectionId::Ladder, SectionId::Model] {
            assert!(layout.span(id).is_some());
        }
        assert!(layout.span(SectionId::LiveSystem).is_none());
        assert!(layout.span(SectionId::Academy).is_none());
        assert_eq!(layout.span(SectionId::Ecosystem).unwrap().top, HERO_HEIGHT);
    }
}
