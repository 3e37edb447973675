/// Section navigation highlight
///
/// The nav bar lists every section of the deck. Scrolling the page moves
/// the highlight to whichever section sits under a reference offset;
/// clicking an entry jumps there and highlights it straight away.

/// Named sections, in nav bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Ecosystem,
    LiveSystem,
    Ladder,
    Academy,
    Model,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Ecosystem,
        SectionId::LiveSystem,
        SectionId::Ladder,
        SectionId::Academy,
        SectionId::Model,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Ecosystem => "生态矩阵",
            SectionId::LiveSystem => "直播分佣",
            SectionId::Ladder => "晋升体系",
            SectionId::Academy => "商学院",
            SectionId::Model => "盈利模型",
        }
    }
}

/// Vertical extent of a rendered section, in scroll coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Where each rendered section lives on the page.
///
/// Sections listed in the nav bar but absent here have no body on the
/// page; they are never highlighted by scrolling and clicking them does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    spans: Vec<SectionSpan>,
}

impl SectionLayout {
    /// Stack blocks top to bottom. `None` blocks (hero, footer) take up
    /// space but are not navigable.
    pub fn stacked(blocks: &[(Option<SectionId>, f32)]) -> Self {
        let mut top = 0.0;
        let mut spans = Vec::new();
        for &(id, height) in blocks {
            if let Some(id) = id {
                spans.push(SectionSpan { id, top, height });
            }
            top += height;
        }
        Self { spans }
    }

    pub fn span(&self, id: SectionId) -> Option<&SectionSpan> {
        self.spans.iter().find(|span| span.id == id)
    }

    /// Section under `scroll_y + probe_offset`, if any
    pub fn locate(&self, scroll_y: f32, probe_offset: f32) -> Option<SectionId> {
        let probe = scroll_y + probe_offset;
        self.spans
            .iter()
            .rev()
            .find(|span| span.contains(probe))
            .map(|span| span.id)
    }

    /// Scroll position that puts `id` just below the top edge
    pub fn jump_target(&self, id: SectionId, margin: f32) -> Option<f32> {
        self.span(id).map(|span| (span.top - margin).max(0.0))
    }
}

/// Which nav entry is highlighted
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    active: SectionId,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: SectionId::ALL[0],
        }
    }
}

impl NavState {
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Follow the page as it scrolls. Positions outside every section
    /// keep the current highlight.
    pub fn on_scroll(&mut self, layout: &SectionLayout, scroll_y: f32, probe_offset: f32) {
        if let Some(id) = layout.locate(scroll_y, probe_offset) {
            self.active = id;
        }
    }

    /// Highlight `id` and return the offset to scroll to.
    /// Sections without a body return `None` and leave the highlight as is.
    pub fn jump(&mut self, layout: &SectionLayout, id: SectionId, margin: f32) -> Option<f32> {
        let target = layout.jump_target(id, margin)?;
        self.active = id;
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SectionLayout {
        SectionLayout::stacked(&[
            (None, 400.0),
            (Some(SectionId::Ecosystem), 500.0),
            (Some(SectionId::Ladder), 900.0),
            (Some(SectionId::Model), 600.0),
            (None, 300.0),
        ])
    }

    #[test]
    fn test_stacked_offsets() {
        let layout = layout();
        assert_eq!(layout.span(SectionId::Ladder).unwrap().top, 900.0);
        assert_eq!(layout.span(SectionId::Model).unwrap().top, 1800.0);
        assert!(layout.span(SectionId::Academy).is_none());
    }

    #[test]
    fn test_locate_uses_probe_offset() {
        let layout = layout();
        assert_eq!(layout.locate(0.0, 100.0), None);
        assert_eq!(layout.locate(300.0, 100.0), Some(SectionId::Ecosystem));
        assert_eq!(layout.locate(799.0, 100.0), Some(SectionId::Ecosystem));
        assert_eq!(layout.locate(800.0, 100.0), Some(SectionId::Ladder));
        assert_eq!(layout.locate(2300.0, 100.0), None);
    }

    #[test]
    fn test_scroll_keeps_highlight_outside_sections() {
        let layout = layout();
        let mut nav = NavState::default();
        assert_eq!(nav.active(), SectionId::Ecosystem);

        nav.on_scroll(&layout, 1000.0, 100.0);
        assert_eq!(nav.active(), SectionId::Ladder);

        nav.on_scroll(&layout, 0.0, 100.0);
        assert_eq!(nav.active(), SectionId::Ladder);
    }

    #[test]
    fn test_jump_marks_active_immediately() {
        let layout = layout();
        let mut nav = NavState::default();

        assert_eq!(nav.jump(&layout, SectionId::Model, 16.0), Some(1784.0));
        assert_eq!(nav.active(), SectionId::Model);

        // the landing position agrees with the scroll-spy
        nav.on_scroll(&layout, 1784.0, 100.0);
        assert_eq!(nav.active(), SectionId::Model);
    }

    #[test]
    fn test_jump_to_missing_section_is_noop() {
        let layout = layout();
        let mut nav = NavState::default();
        assert_eq!(nav.jump(&layout, SectionId::Academy, 16.0), None);
        assert_eq!(nav.active(), SectionId::Ecosystem);
    }

    #[test]
    fn test_jump_target_clamped() {
        let layout = SectionLayout::stacked(&[(Some(SectionId::Ecosystem), 500.0)]);
        assert_eq!(layout.jump_target(SectionId::Ecosystem, 80.0), Some(0.0));
    }
}
