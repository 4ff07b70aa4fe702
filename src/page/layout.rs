//! Document geometry: where every section, card and row of text sits.
//!
//! The layout is recomputed from the terminal width and page height whenever
//! anchors are needed, so wrapping changes after a resize show up in the next
//! measurement.

use super::{AnchorSet, SectionAnchor, SectionId};
use crate::content::{self, ContactLink, Experience};
use ratatui::layout::Rect;
use serde::Serialize;

/// Widest the content column gets
pub const MAX_CONTENT_WIDTH: u16 = 100;
/// Blank columns between the column edge and the cards
pub const PAGE_PADDING: u16 = 2;
/// Blank rows between sections
pub const SECTION_GAP: u16 = 2;
/// Blank rows between timeline entries
pub const ENTRY_GAP: u16 = 1;
/// Padding rows inside a card border
pub const CARD_PAD_Y: u16 = 1;
/// Contact tile size
pub const TILE_WIDTH: u16 = 16;
/// Contact tile height
pub const TILE_HEIGHT: u16 = 4;
/// Columns between contact tiles
pub const TILE_GAP: u16 = 4;
/// Shortest snapshot section, for very small terminals
pub const MIN_SNAPSHOT_HEIGHT: u16 = 5;
/// Narrowest timeline card before falling back to a stacked layout
pub const MIN_TIMELINE_CARD_WIDTH: u16 = 18;
/// Blank rows under the footer
pub const FOOTER_MARGIN: u16 = 2;

/// Which navigation chrome the page uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavLayout {
    /// Inline navigation labels, two-sided timeline
    Desktop,
    /// Hamburger menu, stacked timeline
    Mobile,
}

impl NavLayout {
    /// Pick the layout for a terminal `width` columns wide
    #[must_use]
    pub const fn for_width(width: u16, desktop_min_width: u16) -> Self {
        if width >= desktop_min_width {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    const fn card_pad_x(self) -> u16 {
        match self {
            Self::Desktop => 3,
            Self::Mobile => 1,
        }
    }
}

/// How a row of text is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Section heading, left aligned
    Heading,
    /// Section heading, centered
    HeadingCentered,
    /// Card title
    Title,
    /// Secondary line under a title
    Subtitle,
    /// Running text
    Body,
    /// De-emphasized text
    Muted,
    /// Centered de-emphasized text
    MutedCentered,
    /// Empty spacer row
    Blank,
}

/// One line of laid-out text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Text, already wrapped to fit
    pub text: String,
    /// Styling class
    pub kind: RowKind,
}

impl Row {
    /// Create a row
    #[must_use]
    pub fn new(text: impl Into<String>, kind: RowKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// An empty spacer row
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            text: String::new(),
            kind: RowKind::Blank,
        }
    }
}

/// A bordered card with rows of text at the top of its inner area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Outer area including the border
    pub area: Rect,
    /// Horizontal padding inside the border
    pub pad_x: u16,
    /// Rows drawn from the top of the inner area
    pub rows: Vec<Row>,
}

impl Card {
    /// Area inside the border and padding
    #[must_use]
    pub fn inner(&self) -> Rect {
        inner_area(self.area, self.pad_x, CARD_PAD_Y)
    }
}

/// Which side of the timeline an entry sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left of the line, arrow pointing right
    Left,
    /// Right of the line, arrow pointing left
    Right,
    /// Full width, no line
    Full,
}

/// One experience card on the timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Card area
    pub area: Rect,
    /// Position relative to the timeline
    pub side: Side,
    /// Title, company, dates and details
    pub rows: Vec<Row>,
}

impl Entry {
    /// Row of the entry's vertical midpoint, where the dot and arrow go
    #[must_use]
    pub const fn mid_y(&self) -> u16 {
        self.area.y + self.area.height / 2
    }

    /// Area inside the border and padding
    #[must_use]
    pub fn inner(&self) -> Rect {
        inner_area(self.area, 1, 0)
    }
}

/// Vertical timeline line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    /// Column of the line
    pub x: u16,
    /// First row
    pub top: u16,
    /// Row just past the end
    pub bottom: u16,
}

/// Work experience section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceLayout {
    /// Outer card holding the heading
    pub card: Card,
    /// Timeline cards, most recent first
    pub entries: Vec<Entry>,
    /// Center line, when entries alternate sides
    pub timeline: Option<Timeline>,
}

/// Contact section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLayout {
    /// Outer card holding the heading
    pub card: Card,
    /// Tile areas paired with their links
    pub tiles: Vec<(Rect, ContactLink)>,
    /// Area of the link text under the tiles
    pub links_area: Rect,
    /// Link targets, one or more rows each
    pub links: Vec<Row>,
}

/// Geometry of the whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Document width in columns
    pub width: u16,
    /// Document height in rows
    pub height: u16,
    /// Navigation chrome the layout was computed for
    pub nav: NavLayout,
    /// Snapshot section area
    pub snapshot: Rect,
    /// About section card
    pub about: Card,
    /// Experience section
    pub experience: ExperienceLayout,
    /// Contact section
    pub contact: ContactLayout,
    /// Footer row
    pub footer: Rect,
}

impl PageLayout {
    /// Lay out the document `width` columns wide with a snapshot
    /// `snapshot_height` rows tall.
    #[must_use]
    pub fn compute(width: u16, snapshot_height: u16, nav: NavLayout) -> Self {
        let width = width.max(1);
        let column_width = width.min(MAX_CONTENT_WIDTH);
        let column_x = (width - column_width) / 2;
        let padding = PAGE_PADDING.min(column_width / 4);
        let card_x = column_x + padding;
        let card_width = column_width.saturating_sub(padding * 2).max(1);
        let pad_x = nav.card_pad_x();

        let snapshot = Rect::new(0, 0, width, snapshot_height.max(MIN_SNAPSHOT_HEIGHT));

        let mut y = snapshot.bottom().saturating_add(SECTION_GAP);
        let about = about_card(Rect::new(card_x, y, card_width, 0), pad_x);

        y = about.area.bottom().saturating_add(SECTION_GAP);
        let experience = experience_layout(Rect::new(card_x, y, card_width, 0), pad_x, nav);

        y = experience.card.area.bottom().saturating_add(SECTION_GAP);
        let contact = contact_layout(Rect::new(card_x, y, card_width, 0), pad_x);

        y = contact.card.area.bottom().saturating_add(1);
        let footer = Rect::new(column_x, y, column_width, 1);
        let height = footer.bottom().saturating_add(FOOTER_MARGIN);

        Self {
            width,
            height,
            nav,
            snapshot,
            about,
            experience,
            contact,
            footer,
        }
    }

    /// Outer area of a section
    #[must_use]
    pub const fn section_area(&self, section: SectionId) -> Rect {
        match section {
            SectionId::Snapshot => self.snapshot,
            SectionId::About => self.about.area,
            SectionId::Experience => self.experience.card.area,
            SectionId::Contact => self.contact.card.area,
        }
    }

    /// Anchors for every section
    #[must_use]
    pub fn anchors(&self) -> AnchorSet {
        SectionId::ALL
            .into_iter()
            .fold(AnchorSet::new(), |anchors, id| {
                let area = self.section_area(id);
                anchors.with(
                    id,
                    SectionAnchor::new(i32::from(area.y), i32::from(area.height)),
                )
            })
    }
}

fn inner_area(area: Rect, pad_x: u16, pad_y: u16) -> Rect {
    let inset_x = 1 + pad_x;
    let inset_y = 1 + pad_y;
    Rect::new(
        area.x.saturating_add(inset_x),
        area.y.saturating_add(inset_y),
        area.width.saturating_sub(inset_x * 2),
        area.height.saturating_sub(inset_y * 2),
    )
}

/// Text width available inside a card of `width` columns
const fn inner_width(width: u16, pad_x: u16) -> u16 {
    let used = 2 + pad_x * 2;
    if width > used { width - used } else { 1 }
}

const fn card_height(content_rows: u16) -> u16 {
    content_rows + 2 + CARD_PAD_Y * 2
}

fn row_count(rows: &[Row]) -> u16 {
    u16::try_from(rows.len()).unwrap_or(u16::MAX)
}

fn wrapped_rows(text: &str, width: u16, kind: RowKind) -> impl Iterator<Item = Row> {
    wrap(text, usize::from(width), "", "")
        .into_iter()
        .map(move |line| Row::new(line, kind))
}

fn about_card(slot: Rect, pad_x: u16) -> Card {
    let text_width = inner_width(slot.width, pad_x);
    let mut rows = vec![Row::new(content::ABOUT_HEADING, RowKind::Heading)];
    for paragraph in content::ABOUT {
        rows.push(Row::blank());
        rows.extend(wrapped_rows(paragraph, text_width, RowKind::Body));
    }

    Card {
        area: Rect {
            height: card_height(row_count(&rows)),
            ..slot
        },
        pad_x,
        rows,
    }
}

fn entry_rows(index: usize, experience: &Experience, text_width: u16) -> Vec<Row> {
    let width = usize::from(text_width);
    let mut rows: Vec<Row> = wrap(
        experience.title,
        width,
        &format!("{index}. "),
        &" ".repeat(index.to_string().len() + 2),
    )
    .into_iter()
    .map(|line| Row::new(line, RowKind::Title))
    .collect();
    rows.extend(wrapped_rows(experience.company, text_width, RowKind::Subtitle));
    rows.extend(wrapped_rows(
        &experience.date_range(),
        text_width,
        RowKind::Muted,
    ));

    if !experience.details.is_empty() {
        rows.push(Row::blank());
        for detail in experience.details {
            rows.extend(
                wrap(detail, width, "\u{2022} ", "  ")
                    .into_iter()
                    .map(|line| Row::new(line, RowKind::Body)),
            );
        }
    }

    rows
}

fn experience_layout(slot: Rect, pad_x: u16, nav: NavLayout) -> ExperienceLayout {
    let heading = vec![
        Row::new(content::EXPERIENCE_HEADING, RowKind::HeadingCentered),
        Row::blank(),
    ];
    let provisional = Card {
        area: Rect {
            height: u16::MAX - slot.y,
            ..slot
        },
        pad_x,
        rows: Vec::new(),
    };
    let inner = provisional.inner();
    let entries_top = inner.y + row_count(&heading);

    let line_x = inner.x + inner.width / 2;
    let left_width = line_x.saturating_sub(inner.x + 2);
    let right_x = line_x + 2;
    let right_width = inner.right().saturating_sub(right_x);
    let two_sided = nav == NavLayout::Desktop
        && left_width >= MIN_TIMELINE_CARD_WIDTH
        && right_width >= MIN_TIMELINE_CARD_WIDTH;

    let mut entries = Vec::with_capacity(content::EXPERIENCES.len());
    let mut y = entries_top;
    for (idx, experience) in content::EXPERIENCES.iter().enumerate() {
        let index = idx + 1;
        let (x, width, side) = if !two_sided {
            (inner.x, inner.width.max(1), Side::Full)
        } else if index % 2 == 1 {
            (inner.x, left_width, Side::Left)
        } else {
            (right_x, right_width, Side::Right)
        };
        let rows = entry_rows(index, experience, inner_width(width, 1));
        let height = row_count(&rows) + 2;
        entries.push(Entry {
            area: Rect::new(x, y, width, height),
            side,
            rows,
        });
        y = y.saturating_add(height).saturating_add(ENTRY_GAP);
    }

    let entries_bottom = entries.last().map_or(entries_top, |e| e.area.bottom());
    let timeline = two_sided.then_some(Timeline {
        x: line_x,
        top: entries_top,
        bottom: entries_bottom,
    });
    let content_rows = entries_bottom - inner.y;

    ExperienceLayout {
        card: Card {
            area: Rect {
                height: card_height(content_rows),
                ..slot
            },
            pad_x,
            rows: heading,
        },
        entries,
        timeline,
    }
}

fn contact_layout(slot: Rect, pad_x: u16) -> ContactLayout {
    let heading = vec![
        Row::new(content::CONTACT_HEADING, RowKind::Heading),
        Row::blank(),
    ];
    let provisional = Card {
        area: Rect {
            height: u16::MAX - slot.y,
            ..slot
        },
        pad_x,
        rows: Vec::new(),
    };
    let inner = provisional.inner();
    let tiles_top = inner.y + row_count(&heading);

    let count = u16::try_from(content::CONTACT_LINKS.len()).unwrap_or(1);
    let row_width = count * TILE_WIDTH + count.saturating_sub(1) * TILE_GAP;
    let mut tiles = Vec::with_capacity(content::CONTACT_LINKS.len());
    let tiles_bottom = if inner.width >= row_width {
        let mut x = inner.x + (inner.width - row_width) / 2;
        for link in content::CONTACT_LINKS {
            tiles.push((Rect::new(x, tiles_top, TILE_WIDTH, TILE_HEIGHT), link));
            x += TILE_WIDTH + TILE_GAP;
        }
        tiles_top + TILE_HEIGHT
    } else {
        let width = TILE_WIDTH.min(inner.width).max(1);
        let x = inner.x + inner.width.saturating_sub(width) / 2;
        let mut y = tiles_top;
        for link in content::CONTACT_LINKS {
            tiles.push((Rect::new(x, y, width, TILE_HEIGHT), link));
            y += TILE_HEIGHT + 1;
        }
        y - 1
    };

    let links: Vec<Row> = content::CONTACT_LINKS
        .iter()
        .flat_map(|link| wrapped_rows(link.href, inner.width.max(1), RowKind::MutedCentered))
        .collect();
    let links_area = Rect::new(inner.x, tiles_bottom + 1, inner.width, row_count(&links));
    let content_rows = links_area.bottom() - inner.y;

    ContactLayout {
        card: Card {
            area: Rect {
                height: card_height(content_rows),
                ..slot
            },
            pad_x,
            rows: heading,
        },
        tiles,
        links_area,
        links,
    }
}

/// Word-wrap `text` to `width` columns.
///
/// The first line starts with `first_prefix` and later lines with
/// `rest_prefix`, which gives bullets a hanging indent. Words longer than a
/// line are split. Always returns at least one line.
#[must_use]
pub fn wrap(text: &str, width: usize, first_prefix: &str, rest_prefix: &str) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::from(first_prefix);
    let mut prefix_len = first_prefix.chars().count();
    let mut current_len = prefix_len;

    for word in text.split_whitespace() {
        let mut remaining = word;
        while !remaining.is_empty() {
            let word_len = remaining.chars().count();
            let has_words = current_len > prefix_len;
            let needed = if has_words { word_len + 1 } else { word_len };

            if current_len + needed <= width {
                if has_words {
                    current.push(' ');
                }
                current.push_str(remaining);
                current_len += needed;
                break;
            }

            if !has_words {
                let available = width.saturating_sub(current_len).max(1);
                let split = remaining
                    .char_indices()
                    .nth(available)
                    .map_or(remaining.len(), |(idx, _)| idx);
                current.push_str(&remaining[..split]);
                remaining = &remaining[split..];
            }

            out.push(std::mem::replace(&mut current, String::from(rest_prefix)));
            prefix_len = rest_prefix.chars().count();
            current_len = prefix_len;
        }
    }

    if current_len > prefix_len || out.is_empty() {
        out.push(current);
    }
    out
}
