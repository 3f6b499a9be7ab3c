use crate::app::Message;
use crate::format;
use crate::ui::{card, header, stat_card};
use crate::view::{self, InventorySummary};
use crate::workspace::Workspace;
use iced::widget::{Column, column, row, scrollable, text};
use iced::{Element, Length};

pub fn view(workspace: &Workspace) -> Element<'_, Message> {
    let threshold = workspace.threshold();
    let currency = workspace.settings().currency.as_str();
    let products = workspace.products();
    let summary = InventorySummary::of(products, threshold);

    let stats = row![
        stat_card("Total Produk", summary.product_count.to_string()),
        stat_card("Total Kantin", workspace.canteens().len().to_string()),
        stat_card("Total Stok", summary.total_stock.to_string()),
        stat_card("Stok Rendah", summary.low_stock_count.to_string()),
    ]
    .spacing(12);

    let figures = row![
        stat_card(
            "Rata-rata Harga",
            format::currency_rounded(summary.average_price, currency)
        ),
        stat_card(
            "Nilai Inventaris",
            format::currency(summary.inventory_value, currency)
        ),
    ]
    .spacing(12);

    let overview = Column::with_children(
        view::canteen_rollups(workspace.canteens(), products, threshold)
            .into_iter()
            .map(|rollup| {
                row![
                    text(rollup.canteen.name).width(Length::FillPortion(3)),
                    text(format!("{} produk", rollup.product_count)).width(Length::FillPortion(1)),
                    text(format!("Stok {}", rollup.total_stock)).width(Length::FillPortion(1)),
                    text(format::currency(rollup.inventory_value, currency))
                        .width(Length::FillPortion(2)),
                ]
                .spacing(10)
                .into()
            }),
    )
    .spacing(6);

    let low: Vec<_> = products
        .iter()
        .filter(|product| view::is_low_stock(product, threshold))
        .collect();
    let warning: Element<'_, Message> = if low.is_empty() {
        text("Semua stok produk aman.").into()
    } else {
        Column::with_children(low.into_iter().map(|product| {
            let canteen = workspace.canteen(product.canteen_id).map_or("-", |c| c.name);
            text(format!(
                "{} ({}) tersisa {}",
                product.name, canteen, product.stock
            ))
            .into()
        }))
        .spacing(4)
        .into()
    };

    scrollable(
        column![
            header("Dashboard", "Ringkasan data kantin SMK Telkom"),
            stats,
            figures,
            card(column![text("Ringkasan Kantin").size(20), overview].spacing(10)),
            card(
                column![
                    text(format!("Peringatan Stok Rendah (<= {threshold})")).size(20),
                    warning
                ]
                .spacing(10)
            ),
        ]
        .spacing(16),
    )
    .height(Length::Fill)
    .into()
}
