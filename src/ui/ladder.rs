/// Tier ladder: the selector list and the detail panel
///
/// Everything the panel shows is a projection of one `Tier`. The only
/// derived values are the rung label, the resolved glyph and the accent
/// color; nesting and numbering live in the two tables below rather than
/// in the catalog.
use iced::widget::image::Image;
use iced::widget::{button, column, container, row, text, text_input, Column, Space};
use iced::{Alignment, Color, ContentFit, Element, Length};

use super::glyph::Glyph;
use super::{palette, styles, BOLD};
use crate::state::attachments::{Attachment, ImageSource};
use crate::state::catalog::Catalog;
use crate::state::data::{Tier, TierId};
use crate::state::selection::Selection;
use crate::Message;

/// Selector entries shown indented under another entry, as (child, parent)
pub const NESTED_TIERS: &[(TierId, TierId)] = &[(TierId(4), TierId(5))];

/// Human-facing rung for each catalog id, as (id, rung).
/// Ids missing here are labelled with their raw id.
pub const LADDER_RUNGS: &[(TierId, u32)] = &[
    (TierId(1), 1),
    (TierId(2), 2),
    (TierId(3), 3),
    (TierId(4), 4),
    (TierId(5), 5),
    (TierId(6), 6),
    (TierId(7), 7),
];

pub fn rung(id: TierId) -> u32 {
    LADDER_RUNGS
        .iter()
        .find(|(tier, _)| *tier == id)
        .map(|(_, rung)| *rung)
        .unwrap_or(id.0)
}

pub fn level_label(id: TierId) -> String {
    format!("Level {}", rung(id))
}

fn parent_of(id: TierId) -> Option<TierId> {
    NESTED_TIERS
        .iter()
        .find(|(child, _)| *child == id)
        .map(|(_, parent)| *parent)
}

fn children_of(id: TierId) -> impl Iterator<Item = TierId> {
    NESTED_TIERS
        .iter()
        .filter(move |(_, parent)| *parent == id)
        .map(|(child, _)| *child)
}

/// One line of the tier selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorRow {
    pub id: TierId,
    /// Drawn indented under its parent
    pub nested: bool,
    /// Carries the expand/collapse toggle for its nested entries
    pub group_toggle: bool,
}

/// Selector order: catalog order, with each nested entry moved right
/// after its parent and only listed while the group is expanded.
/// A nested entry whose parent is missing from the catalog stays in place.
pub fn selector_rows(catalog: &Catalog, expanded: bool) -> Vec<SelectorRow> {
    let mut rows = Vec::with_capacity(catalog.len());

    for tier in catalog.iter() {
        let nested_elsewhere = parent_of(tier.id).is_some_and(|parent| catalog.contains(parent));
        if nested_elsewhere {
            continue;
        }

        let children: Vec<TierId> = children_of(tier.id)
            .filter(|child| catalog.contains(*child))
            .collect();

        rows.push(SelectorRow {
            id: tier.id,
            nested: false,
            group_toggle: !children.is_empty(),
        });

        if expanded {
            rows.extend(children.into_iter().map(|id| SelectorRow {
                id,
                nested: true,
                group_toggle: false,
            }));
        }
    }

    rows
}

/// What the detail panel displays for a tier
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub id: TierId,
    pub level_label: String,
    pub title: &'a str,
    pub benefit: &'a str,
    pub condition: &'a str,
    pub kpis: &'a [String],
    pub strategic_role: &'a str,
    /// `None` when the tier has no privileges; the panel is omitted
    pub privileges: Option<&'a [String]>,
    pub glyph: Glyph,
    pub accent: Color,
}

impl<'a> DetailView<'a> {
    pub fn project(tier: &'a Tier) -> Self {
        Self {
            id: tier.id,
            level_label: level_label(tier.id),
            title: &tier.title,
            benefit: &tier.benefit,
            condition: &tier.condition,
            kpis: &tier.kpi_details,
            strategic_role: &tier.strategic_role,
            privileges: tier.has_privileges().then_some(tier.privileges.as_slice()),
            glyph: Glyph::resolve(&tier.icon),
            accent: palette::accent(&tier.color),
        }
    }
}

/// Left-hand tier list
pub fn selector<'a>(catalog: &'a Catalog, selection: &Selection) -> Element<'a, Message> {
    let rows = selector_rows(catalog, selection.is_expanded());

    let entries = rows.into_iter().filter_map(|entry| {
        let tier = catalog.get(entry.id)?;
        Some(selector_entry(tier, entry, selection))
    });

    container(Column::with_children(entries))
        .width(Length::FillPortion(1))
        .style(styles::card)
        .clip(true)
        .into()
}

fn selector_entry<'a>(tier: &'a Tier, entry: SelectorRow, selection: &Selection) -> Element<'a, Message> {
    let active = selection.is_active(tier.id);
    let glyph = Glyph::resolve(&tier.icon);

    let badge = container(glyph.view(20.0, if active { palette::WHITE } else { palette::MUTED }))
        .width(44)
        .height(44)
        .center_x(44)
        .center_y(44)
        .style(styles::fill(if active { palette::RED } else { palette::LINE }, 12.0));

    let labels = column![
        text(level_label(tier.id))
            .size(10)
            .font(BOLD)
            .color(if active { palette::RED } else { palette::MUTED }),
        text(&tier.title).size(17).font(BOLD),
    ]
    .spacing(2);

    let mut line = row![badge, labels].spacing(16).align_y(Alignment::Center);

    if entry.group_toggle {
        line = line.push(Space::with_width(Length::Fill)).push(
            button(text(if selection.is_expanded() { "▾" } else { "▸" }).size(16))
                .on_press(Message::ToggleGroup)
                .style(styles::ghost),
        );
    } else if active {
        line = line
            .push(Space::with_width(Length::Fill))
            .push(text("›").size(22).color(palette::RED));
    }

    let indent = if entry.nested { 44.0 } else { 20.0 };

    button(line)
        .on_press(Message::SelectTier(tier.id))
        .width(Length::Fill)
        .padding([16.0, indent])
        .style(styles::selector_row(active))
        .into()
}

/// Attachment state the detail panel needs
pub struct AttachmentSlot<'a> {
    pub attachment: Option<&'a Attachment>,
    /// Current URL prompt input, when the prompt is open
    pub prompt: Option<&'a str>,
}

/// Right-hand detail panel for the selected tier
pub fn detail<'a>(view: DetailView<'a>, slot: AttachmentSlot<'a>) -> Element<'a, Message> {
    let header = row![
        column![
            container(text(format!("STRATEGIC {}", view.level_label.to_uppercase())).size(11).font(BOLD))
                .padding([4, 12])
                .style(styles::fill(palette::faded(palette::RED, 0.1), 12.0)),
            text(view.title).size(40).font(BOLD).color(palette::INK),
            text(view.benefit).size(15).color(palette::SUB),
        ]
        .spacing(10),
        Space::with_width(Length::Fill),
        view.glyph.view(56.0, palette::faded(view.accent, 0.6)),
    ]
    .align_y(Alignment::Start);

    let kpis = view.kpis.iter().map(|kpi| {
        container(row![text("✓").color(palette::JADE), text(kpi).size(14)].spacing(8))
            .padding([8, 12])
            .width(Length::Fill)
            .style(styles::fill(palette::BG, 8.0))
            .into()
    });

    let requirements = column![
        text("晋升门槛 & KPI").size(13).font(BOLD).color(palette::RED),
        text(view.condition).size(20).font(BOLD).color(palette::INK),
        Column::with_children(kpis).spacing(8),
    ]
    .spacing(14)
    .width(Length::FillPortion(1));

    let role = column![
        text("战略定位").size(13).font(BOLD).color(palette::JADE),
        text(format!("“{}”", view.strategic_role)).size(17).color(palette::SUB),
    ]
    .spacing(14)
    .width(Length::FillPortion(1));

    let mut panel = column![header, row![requirements, role].spacing(40)].spacing(32);

    if let Some(privileges) = view.privileges {
        panel = panel.push(privileges_panel(privileges));
    }

    panel = panel.push(attachment_panel(view.accent, slot));

    container(panel)
        .padding(40)
        .width(Length::FillPortion(2))
        .style(styles::card)
        .into()
}

fn privileges_panel(privileges: &[String]) -> Element<'_, Message> {
    let rows = privileges.iter().enumerate().map(|(i, privilege)| {
        container(
            row![
                container(text(format!("{}", i + 1)).size(12).font(BOLD).color(palette::GOLD))
                    .width(22)
                    .center_x(22)
                    .style(styles::fill(palette::faded(palette::GOLD, 0.12), 11.0)),
                text(privilege).size(15).color(palette::INK),
            ]
            .spacing(14),
        )
        .padding(14)
        .width(Length::Fill)
        .style(styles::fill(palette::WHITE, 12.0))
        .into()
    });

    container(
        column![
            text("核心权益与激励回报").size(16).font(BOLD).color(palette::INK),
            Column::with_children(rows).spacing(10),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(styles::fill(palette::BG, 16.0))
    .into()
}

fn attachment_panel<'a>(accent: Color, slot: AttachmentSlot<'a>) -> Element<'a, Message> {
    let shown: Element<'a, Message> = match slot.attachment {
        Some(Attachment {
            preview: Some(handle),
            ..
        }) => Image::new(handle.clone())
            .height(Length::Fixed(200.0))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(Attachment {
            source: ImageSource::External(url),
            ..
        }) => column![
            text("外部图片链接").size(12).font(BOLD).color(palette::SUB),
            text(url).size(14).color(palette::BLUE),
        ]
        .spacing(6)
        .into(),
        Some(_) => text("图片已附加").size(14).color(palette::SUB).into(),
        None => text("尚未添加展示图片").size(14).color(palette::MUTED).into(),
    };

    let actions = row![
        button(text("上传图片").size(14))
            .on_press(Message::PickImage)
            .padding([8, 16])
            .style(styles::action(accent)),
        button(text("粘贴图片链接").size(14))
            .on_press(Message::OpenUrlPrompt)
            .padding([8, 16])
            .style(styles::action(palette::INK)),
    ]
    .spacing(12);

    let mut body = column![
        text("展示图片").size(16).font(BOLD).color(palette::INK),
        shown,
        actions
    ]
    .spacing(14);

    if let Some(input) = slot.prompt {
        body = body.push(
            row![
                text_input("https://", input)
                    .on_input(Message::UrlInputChanged)
                    .on_submit(Message::ConfirmUrl)
                    .padding(8),
                button(text("确定").size(14))
                    .on_press(Message::ConfirmUrl)
                    .padding([8, 16])
                    .style(styles::action(palette::JADE)),
                button(text("取消").size(14))
                    .on_press(Message::CancelUrl)
                    .style(styles::ghost),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }

    container(body)
        .padding(24)
        .width(Length::Fill)
        .style(styles::fill(palette::BG, 16.0))
        .into()
}
