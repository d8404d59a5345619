//! PDF timesheet export.
//!
//! Reproduces the printed "VÝKAZ PRÁCE" sheet: a bordered grid of one row
//! per entry, an empty signature column, and a footer with the summed
//! hours, the total amount due and a signature line.

use crate::core::stats::StatsSummary;
use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

const TIMESHEET_HEADERS: [&str; 9] = [
    "datum",
    "název a místo akce",
    "popis činnosti",
    "pracovní doba",
    "přerušení pracovní doby",
    "počet hodin",
    "Kč/hod",
    "celkem Kč/den",
    "podpis odpověd. pracovníka",
];

// Byte codes for the Czech glyphs WinAnsi lacks, placed in slots the
// base encoding leaves undefined and declared in /Differences.
const ENC_CCARON: u8 = 0x81;
const ENC_RCARON: u8 = 0x8D;
const ENC_ECARON: u8 = 0x8F;
const ENC_ECARON_CAP: u8 = 0x90;
const ENC_URING: u8 = 0x9D;

/// Transcode text to the font's single-byte encoding (WinAnsi plus the
/// Czech additions above). Unmapped codepoints degrade to '?'.
fn encode_pdf_text(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            c if c.is_ascii() => c as u8,
            'á' => 0xE1,
            'é' => 0xE9,
            'í' => 0xED,
            'ó' => 0xF3,
            'ú' => 0xFA,
            'ý' => 0xFD,
            'Á' => 0xC1,
            'É' => 0xC9,
            'Í' => 0xCD,
            'Ó' => 0xD3,
            'Ú' => 0xDA,
            'Ý' => 0xDD,
            'š' => 0x9A,
            'Š' => 0x8A,
            'ž' => 0x9E,
            'Ž' => 0x8E,
            'č' => ENC_CCARON,
            'ř' => ENC_RCARON,
            'ě' => ENC_ECARON,
            'Ě' => ENC_ECARON_CAP,
            'ů' => ENC_URING,
            _ => b'?',
        })
        .collect()
}

pub(crate) fn export_pdf(
    entries: &[EntryExport],
    summary: &StatsSummary,
    title: &str,
    currency: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let rows: Vec<Vec<String>> = entries.iter().map(timesheet_row).collect();

    let footer = [
        format!("součet hodin:   {:.2}", summary.total_hours),
        format!("CELKEM K ÚHRADĚ:   {:.2} {}", summary.total_amount, currency),
    ];

    let mut pdf = PdfManager::new();
    pdf.write_timesheet(title, &TIMESHEET_HEADERS, &rows, &footer, "podpis pracovníka:");

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}

fn timesheet_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        format!("{}, {}", e.event_name, e.event_location),
        e.description.clone(),
        format!("{}-{}", e.start_time, e.end_time),
        e.break_minutes.to_string(),
        e.total_hours.clone(),
        e.hourly_rate.clone(),
        e.total_amount.clone(),
        String::new(), // signed on paper
    ]
}

struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl PdfManager {
    fn new() -> Self {
        let mut pdf = Pdf::new();

        // Manually managed object ids
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        // Global font. WinAnsi so accented text maps to single bytes;
        // the Czech glyphs missing from WinAnsi ride in /Differences.
        {
            let mut font = pdf.type1_font(font_id);
            font.base_font(Name(b"Helvetica"));
            let mut encoding = font.encoding_custom();
            encoding.base_encoding(Name(b"WinAnsiEncoding"));
            let mut differences = encoding.differences();
            differences.consecutive(ENC_CCARON, [Name(b"ccaron")]);
            differences.consecutive(ENC_RCARON, [Name(b"rcaron")]);
            differences.consecutive(ENC_ECARON, [Name(b"ecaron"), Name(b"Ecaron")]);
            differences.consecutive(ENC_URING, [Name(b"uring")]);
        }

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0, // A4 landscape
            page_h: 595.0,
            margin: 40.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 8.0,
            header_font_size: 8.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page and its content object.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let encoded = encode_pdf_text(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encoded));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        x_start: f32,
        row: &[String],
        font_size: f32,
    ) {
        let mut x = x_start;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 5.0, font_size, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Size columns from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 5.0).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                let w = (cell.len() as f32 * 4.6).max(widths[i]);
                widths[i] = w;
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header(&self, content: &mut Content, title: &str) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin,
            self.title_font_size,
            title,
        );
        self.draw_text(
            content,
            self.page_w / 2.0,
            self.page_h - self.margin,
            self.title_font_size,
            "JMÉNO:",
        );
    }

    /// Multi-page timesheet: title, bordered table, footer totals and a
    /// signature line after the last row.
    fn write_timesheet(
        &mut self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        footer: &[String],
        signature_label: &str,
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut footer_drawn = false;

        while !footer_drawn {
            let mut content = self.new_page();
            self.draw_page_header(&mut content, title);

            let mut y = self.page_h - self.margin - 30.0;

            // table header
            content.save_state();
            content.set_fill_rgb(0.9, 0.9, 0.9);
            content.rect(self.margin, y, col_widths.iter().sum(), self.row_h);
            content.fill_nonzero();
            content.restore_state();

            self.draw_row(
                &mut content,
                y,
                &col_widths,
                self.margin,
                &header_row,
                self.header_font_size,
            );

            y -= self.row_h;

            let mut consumed = 0;

            for row in remaining.iter() {
                if y - self.row_h < self.margin {
                    break;
                }

                self.draw_row(&mut content, y, &col_widths, self.margin, row, self.font_size);

                y -= self.row_h;
                consumed += 1;
            }

            remaining = &remaining[consumed..];

            // Footer goes below the last table row, on its own page when
            // the current one has no room left.
            if remaining.is_empty() && y - 80.0 > self.margin {
                let mut fy = y - 10.0;
                for line in footer {
                    self.draw_text(&mut content, self.margin, fy, 10.0, line);
                    fy -= 16.0;
                }
                self.draw_text(
                    &mut content,
                    self.page_w / 2.0,
                    fy - 30.0,
                    10.0,
                    signature_label,
                );
                footer_drawn = true;
            }

            self.finalize_page(content);
        }
    }

    fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
