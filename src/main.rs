use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{column, row, scrollable};
use iced::{Element, Length, Size, Task, Theme};
use rfd::FileDialog;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod state;
mod ui;

use config::Config;
use state::attachments::{self, AttachError, Attachment, Attachments, ImageSource};
use state::catalog::Catalog;
use state::data::TierId;
use state::nav::{NavState, SectionId, SectionLayout};
use state::selection::Selection;
use ui::ladder::{AttachmentSlot, DetailView};
use ui::model::CommissionModel;
use ui::{palette, sections};

/// Id of the page scrollable, shared by the view and nav jumps
const DECK_SCROLL_ID: &str = "deck";

/// Extensions offered by the file picker; any file is still accepted
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Open URL prompt, bound to the tier that was selected when it opened
#[derive(Debug, Clone)]
struct UrlPrompt {
    tier: TierId,
    input: String,
}

/// Main application state
struct StrategyDeck {
    config: Config,
    /// The static tier catalog
    catalog: Catalog,
    /// Tier shown in the detail panel
    selection: Selection,
    /// Images attached during this session
    attachments: Attachments,
    url_prompt: Option<UrlPrompt>,
    /// Highlighted nav entry
    nav: NavState,
    layout: SectionLayout,
    commission: CommissionModel,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a tier in the selector
    SelectTier(TierId),
    /// User expanded or collapsed the nested tier entry
    ToggleGroup,
    /// User clicked "upload image"
    PickImage,
    /// Background file read finished for the given tier
    ImageLoaded(TierId, Result<String, AttachError>),
    OpenUrlPrompt,
    UrlInputChanged(String),
    ConfirmUrl,
    CancelUrl,
    /// User clicked a nav bar entry
    NavigateTo(SectionId),
    /// Page scrolled
    Scrolled(Viewport),
}

impl StrategyDeck {
    /// Create a new instance of the application
    fn new(config: Config, catalog: Catalog) -> (Self, Task<Message>) {
        info!("🎨 Strategy deck initialized with {} tiers", catalog.len());

        let selection = Selection::new(&catalog);

        (
            StrategyDeck {
                config,
                catalog,
                selection,
                attachments: Attachments::new(),
                url_prompt: None,
                nav: NavState::default(),
                layout: sections::page_layout(),
                commission: CommissionModel::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTier(id) => {
                self.selection.select(id, &self.catalog);
                // The prompt belongs to the tier it was opened for
                self.url_prompt = None;
                Task::none()
            }
            Message::ToggleGroup => {
                self.selection.toggle_group();
                Task::none()
            }
            Message::PickImage => {
                let tier = self.selection.active_id();

                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("选择展示图片")
                    .add_filter("图片", IMAGE_EXTENSIONS)
                    .pick_file();

                let Some(path) = file else {
                    debug!("Image pick cancelled for tier {}", tier);
                    return Task::none();
                };

                info!("📂 Reading {} for tier {}", path.display(), tier);
                Task::perform(attachments::read_as_data_url(path), move |result| {
                    Message::ImageLoaded(tier, result)
                })
            }
            Message::ImageLoaded(tier, result) => {
                match result {
                    Ok(url) => self
                        .attachments
                        .attach(tier, Attachment::new(ImageSource::DataUrl(url))),
                    Err(e) => warn!("⚠️  Keeping previous image for tier {}: {}", tier, e),
                }
                Task::none()
            }
            Message::OpenUrlPrompt => {
                self.url_prompt = Some(UrlPrompt {
                    tier: self.selection.active_id(),
                    input: String::new(),
                });
                Task::none()
            }
            Message::UrlInputChanged(value) => {
                if let Some(prompt) = self.url_prompt.as_mut() {
                    prompt.input = value;
                }
                Task::none()
            }
            Message::ConfirmUrl => {
                if let Some(prompt) = self.url_prompt.take() {
                    match attachments::external(&prompt.input) {
                        Some(source) => self.attachments.attach(prompt.tier, Attachment::new(source)),
                        None => debug!("Empty URL for tier {}, nothing attached", prompt.tier),
                    }
                }
                Task::none()
            }
            Message::CancelUrl => {
                self.url_prompt = None;
                Task::none()
            }
            Message::NavigateTo(id) => {
                match self.nav.jump(&self.layout, id, self.config.jump_margin) {
                    Some(y) => scrollable::scroll_to(
                        scrollable::Id::new(DECK_SCROLL_ID),
                        AbsoluteOffset { x: 0.0, y },
                    ),
                    None => {
                        debug!("Section {:?} has no body on this page", id);
                        Task::none()
                    }
                }
            }
            Message::Scrolled(viewport) => {
                self.nav.on_scroll(
                    &self.layout,
                    viewport.absolute_offset().y,
                    self.config.probe_offset,
                );
                Task::none()
            }
        }
    }

    /// Attachment and prompt state for the selected tier
    fn attachment_slot(&self) -> AttachmentSlot<'_> {
        let active = self.selection.active_id();
        AttachmentSlot {
            attachment: self.attachments.get(active),
            prompt: self
                .url_prompt
                .as_ref()
                .filter(|prompt| prompt.tier == active)
                .map(|prompt| prompt.input.as_str()),
        }
    }

    fn ladder(&self) -> Element<'_, Message> {
        let tier = self.selection.active(&self.catalog);

        let body = column![
            sections::section_header(
                "七级加盟晋升体系",
                "深度解析各层级的门槛、权益与战略定位，确保每一分投入都有回响",
                palette::RED,
            ),
            row![
                ui::ladder::selector(&self.catalog, &self.selection),
                ui::ladder::detail(DetailView::project(tier), self.attachment_slot()),
            ]
            .spacing(32),
        ]
        .spacing(36);

        sections::page_block(body, sections::LADDER_HEIGHT)
    }

    fn model(&self) -> Element<'_, Message> {
        let body = column![
            sections::section_header("盈利模型模拟", "透明的分润体系与持续的增长动力", palette::RED),
            ui::model::view(self.commission),
        ]
        .spacing(36);

        sections::page_block(body, sections::MODEL_HEIGHT)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        // Block order must match sections::PAGE_BLOCKS
        let page = column![
            sections::hero(),
            sections::ecosystem(),
            self.ladder(),
            self.model(),
            sections::footer(),
        ];

        column![
            sections::nav_bar(&self.nav),
            scrollable(page)
                .id(scrollable::Id::new(DECK_SCROLL_ID))
                .on_scroll(Message::Scrolled)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let config = config::load();
    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("❌ Tier catalog is invalid: {}", e);
            std::process::exit(1);
        }
    };

    iced::application(
        "我的搭配师 · 运营增长与晋升战略",
        StrategyDeck::update,
        StrategyDeck::view,
    )
    .theme(StrategyDeck::theme)
    .window_size(Size::new(config.window_width, config.window_height))
    .centered()
    .run_with(move || StrategyDeck::new(config, catalog))
}
