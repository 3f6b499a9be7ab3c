use crate::app::Message;
use crate::error::FormError;
use crate::form::{MIN_LOW_STOCK_THRESHOLD, SettingsDraft, SettingsField};
use crate::model::BackupFrequency;
use crate::router::SettingsTab;
use crate::ui::{card, choices, field, form_error, header};
use crate::workspace::Workspace;
use iced::widget::{button, column, row, scrollable, text};
use iced::{Element, Length};

fn change(f: fn(String) -> SettingsField) -> impl Fn(String) -> Message {
    move |value| Message::SettingsFieldChanged(f(value))
}

fn switch<'a>(label: &'a str, on: bool, toggle: SettingsField) -> Element<'a, Message> {
    let style = if on { button::success } else { button::secondary };
    row![
        text(label).width(Length::Fill),
        button(if on { "Aktif" } else { "Nonaktif" })
            .style(style)
            .on_press(Message::SettingsFieldChanged(toggle)),
    ]
    .spacing(10)
    .into()
}

fn tab_body(tab: SettingsTab, draft: &SettingsDraft) -> Element<'_, Message> {
    match tab {
        SettingsTab::General => column![
            text("Pengaturan Umum").size(20),
            field(
                "Nama Aplikasi",
                "Nama aplikasi",
                &draft.app_name,
                change(SettingsField::AppName)
            ),
            field(
                "Nama Sekolah",
                "Nama sekolah",
                &draft.school_name,
                change(SettingsField::SchoolName)
            ),
        ]
        .spacing(10)
        .into(),

        SettingsTab::System => column![
            text("Pengaturan Sistem").size(20),
            field(
                "Batas Stok Rendah",
                "10",
                &draft.low_stock_threshold,
                change(SettingsField::LowStockThreshold)
            ),
            text(format!(
                "Produk dengan stok di bawah atau sama dengan angka ini ditandai stok rendah (minimal {MIN_LOW_STOCK_THRESHOLD})."
            ))
            .size(12),
            field("Mata Uang", "IDR", &draft.currency, change(SettingsField::Currency)),
            field(
                "Zona Waktu",
                "Asia/Jakarta",
                &draft.timezone,
                change(SettingsField::Timezone)
            ),
        ]
        .spacing(10)
        .into(),

        SettingsTab::Notifications => column![
            text("Pengaturan Notifikasi").size(20),
            switch(
                "Notifikasi Email",
                draft.email_notifications,
                SettingsField::ToggleEmailNotifications
            ),
            text("Kirim notifikasi email saat stok produk rendah.").size(12),
        ]
        .spacing(10)
        .into(),

        SettingsTab::Security => column![
            text("Pengaturan Keamanan").size(20),
            switch(
                "Mode Maintenance",
                draft.maintenance_mode,
                SettingsField::ToggleMaintenanceMode
            ),
            text("Menampilkan pemberitahuan maintenance di seluruh halaman.").size(12),
        ]
        .spacing(10)
        .into(),

        SettingsTab::Backup => column![
            text("Backup & Restore").size(20),
            row![
                text("Frekuensi Backup").width(180),
                choices(BackupFrequency::ALL, draft.backup_frequency, |frequency| {
                    Message::SettingsFieldChanged(SettingsField::BackupFrequency(frequency))
                }),
            ]
            .spacing(10),
            row![
                button("Backup Sekarang").on_press(Message::BackupRequested),
                button("Restore Database")
                    .style(button::danger)
                    .on_press(Message::RestoreRequested),
            ]
            .spacing(10),
        ]
        .spacing(10)
        .into(),
    }
}

pub fn view<'a>(
    workspace: &'a Workspace,
    tab: SettingsTab,
    draft: Option<&'a SettingsDraft>,
    error: Option<&FormError>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match draft {
        Some(draft) => tab_body(tab, draft),
        None => text("Memuat pengaturan...").into(),
    };

    let saved = workspace.settings();
    let current = text(format!(
        "Tersimpan: {} | batas stok {} | {}",
        saved.school_name, saved.low_stock_threshold, saved.currency
    ))
    .size(12);

    scrollable(
        column![
            header("Pengaturan Sistem", "Kelola konfigurasi dan preferensi sistem"),
            choices(SettingsTab::ALL, tab, Message::SettingsTabSelected),
            card(body),
            form_error(error),
            row![
                button("Simpan Pengaturan").on_press(Message::SettingsSave),
                button("Reset")
                    .style(button::secondary)
                    .on_press(Message::SettingsReset),
            ]
            .spacing(10),
            current,
        ]
        .spacing(16),
    )
    .height(Length::Fill)
    .into()
}
