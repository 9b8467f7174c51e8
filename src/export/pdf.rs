// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// A4 portrait, in points.
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 40.0;
const ROW_H: f32 = 20.0;
/// Gap between the title baseline and the first table row.
const TITLE_GAP: f32 = 36.0;

const FONT_SIZE: f32 = 9.5;
const HEADER_FONT_SIZE: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 15.0;
const SUBTITLE_FONT_SIZE: f32 = 8.5;

/// Rough Helvetica advance per character at size 1.
const CHAR_W: f32 = 0.55;

/// Paginated table document built on `pdf-writer`. Object ids are handed out
/// sequentially; the catalog and page tree are written on `finish`.
pub struct TableDocument {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    bold_font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl Default for TableDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDocument {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            bold_font_id,
            page_refs: Vec::new(),
            next_id: 5,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Rows that fit below the title and the header row.
    pub fn rows_per_page() -> usize {
        let usable = PAGE_H - 2.0 * MARGIN - TITLE_GAP - ROW_H;
        (usable / ROW_H).floor().max(1.0) as usize
    }

    /// Lay out the whole table, repeating the header on every page.
    /// Callers refuse empty tables before getting here.
    pub fn write_table(&mut self, title: &str, subtitle: &str, headers: &[String], rows: &[Vec<String>]) {
        let widths = column_widths(headers, rows);
        let per_page = Self::rows_per_page();
        let page_count = rows.len().div_ceil(per_page);

        for (page_idx, chunk) in rows.chunks(per_page).enumerate() {
            let mut content = Content::new();

            let title_y = PAGE_H - MARGIN;
            text(&mut content, b"F2", TITLE_FONT_SIZE, MARGIN, title_y, title);
            text(&mut content, b"F1", SUBTITLE_FONT_SIZE, MARGIN, title_y - 14.0, subtitle);

            let mut y = title_y - TITLE_GAP;
            fill_band(&mut content, y, &widths, (0.06, 0.46, 0.43));
            content.set_fill_rgb(1.0, 1.0, 1.0);
            draw_row(&mut content, b"F2", HEADER_FONT_SIZE, y, &widths, headers);
            content.set_fill_rgb(0.0, 0.0, 0.0);

            for (i, row) in chunk.iter().enumerate() {
                y -= ROW_H;
                if i % 2 == 1 {
                    fill_band(&mut content, y, &widths, (0.95, 0.97, 0.96));
                }
                draw_row(&mut content, b"F1", FONT_SIZE, y, &widths, row);
            }

            let footer = format!("Page {} of {}", page_idx + 1, page_count);
            text(&mut content, b"F1", FONT_SIZE, PAGE_W - MARGIN - 60.0, MARGIN - 20.0, &footer);

            self.push_page(content);
        }
    }

    fn push_page(&mut self, content: Content) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);
            page.resources()
                .fonts()
                .pair(Name(b"F1"), self.font_id)
                .pair(Name(b"F2"), self.bold_font_id);
        }

        self.pdf.stream(content_id, &content.finish());
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(self.page_refs.len() as i32)
            .kids(self.page_refs.iter().copied());
        self.pdf.finish()
    }
}

/// Column widths proportional to the longest cell, scaled to the page width.
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
    let mut chars: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(chars.len()) {
            chars[i] = chars[i].max(cell.chars().count());
        }
    }

    let natural: Vec<f32> = chars
        .iter()
        .map(|c| *c as f32 * CHAR_W * HEADER_FONT_SIZE + 12.0)
        .collect();
    let total: f32 = natural.iter().sum();
    let available = PAGE_W - 2.0 * MARGIN;
    let scale = available / total.max(1.0);

    natural.into_iter().map(|w| w * scale).collect()
}

fn fill_band(content: &mut Content, y: f32, widths: &[f32], rgb: (f32, f32, f32)) {
    content.save_state();
    content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
    content.rect(MARGIN, y, widths.iter().sum(), ROW_H);
    content.fill_nonzero();
    content.restore_state();
}

fn draw_row(content: &mut Content, font: &[u8], size: f32, y: f32, widths: &[f32], cells: &[String]) {
    let mut x = MARGIN;
    for (w, cell) in widths.iter().zip(cells) {
        text(content, font, size, x + 5.0, y + 6.0, cell);

        content.save_state();
        content.set_stroke_rgb(0.75, 0.75, 0.75);
        content.rect(x, y, *w, ROW_H);
        content.stroke();
        content.restore_state();

        x += w;
    }
}

fn text(content: &mut Content, font: &[u8], size: f32, x: f32, y: f32, s: &str) {
    let encoded = win_ansi(s);
    content.begin_text();
    content.set_font(Name(font), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&encoded));
    content.end_text();
}

/// The standard Type1 fonts only cover Latin-1; anything else becomes `?`.
fn win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}
