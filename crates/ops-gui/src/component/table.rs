//! Simple table component.
//!
//! Header row plus striped data rows. Small data sets only; no
//! pagination.

use iced::widget::{column, container, row, rule, text};
use iced::{Element, Length};

use crate::theme::{TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, colors};

/// Column definition.
pub struct TableColumn {
    pub header: String,
    pub width: Length,
}

impl TableColumn {
    pub fn fixed(header: impl Into<String>, width: f32) -> Self {
        Self {
            header: header.into(),
            width: Length::Fixed(width),
        }
    }

    pub fn fill(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            width: Length::Fill,
        }
    }

    pub fn portion(header: impl Into<String>, portion: u16) -> Self {
        Self {
            header: header.into(),
            width: Length::FillPortion(portion),
        }
    }
}

/// A non-paginated table from column defs and row cell strings.
pub fn simple_table<'a, M: 'a>(
    columns: &[TableColumn],
    rows: Vec<Vec<String>>,
) -> Element<'a, M> {
    let c = colors();

    let mut header = row![].spacing(0);
    for col in columns {
        header = header.push(
            container(text(col.header.clone()).size(12).color(c.text_muted))
                .width(col.width)
                .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
                .style(move |_theme| container::Style {
                    background: Some(c.background_secondary.into()),
                    ..Default::default()
                }),
        );
    }

    let mut data_rows = column![].spacing(0);
    for (row_idx, row_data) in rows.into_iter().enumerate() {
        let mut data_row = row![].spacing(0);
        for (col_idx, cell) in row_data.into_iter().enumerate() {
            let width = columns
                .get(col_idx)
                .map(|col| col.width)
                .unwrap_or(Length::Fill);
            let is_even = row_idx % 2 == 0;

            data_row = data_row.push(
                container(text(cell).size(13).color(c.text_secondary))
                    .width(width)
                    .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
                    .style(move |_theme| container::Style {
                        background: Some(
                            if is_even {
                                c.background_elevated
                            } else {
                                c.background_primary
                            }
                            .into(),
                        ),
                        ..Default::default()
                    }),
            );
        }
        data_rows = data_rows.push(data_row);
    }

    column![
        header,
        rule::horizontal(1).style(move |_theme| rule::Style {
            color: c.border_default,
            radius: 0.0.into(),
            fill_mode: rule::FillMode::Full,
            snap: true,
        }),
        data_rows,
    ]
    .spacing(0)
    .into()
}
