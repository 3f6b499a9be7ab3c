use crate::app::Message;
use crate::error::FormError;
use crate::form::{AdminDraft, AdminField, Modal};
use crate::format;
use crate::model::{Admin, Role, Status};
use crate::ui::{card, choices, field, form_error, header, stat_card};
use crate::view::{AdminQuery, AdminSummary, Choice, Listing};
use crate::workspace::Workspace;
use iced::widget::{Column, button, column, row, scrollable, text, text_input};
use iced::{Element, Length};

fn admin_row(admin: &Admin) -> Element<'_, Message> {
    let last_login = admin
        .last_login
        .as_ref()
        .map_or_else(|| "Belum pernah".to_string(), format::timestamp);

    card(
        row![
            column![
                text(admin.name.as_str()).size(18),
                text(admin.email.as_str()).size(13),
            ]
            .spacing(2)
            .width(Length::FillPortion(4)),
            text(admin.role.to_string()).width(Length::FillPortion(2)),
            text(admin.status.to_string()).width(Length::FillPortion(1)),
            column![
                text(format!("Login: {last_login}")).size(12),
                text(format!("Dibuat: {}", format::timestamp(&admin.created_at))).size(12),
            ]
            .width(Length::FillPortion(3)),
            button("Edit").on_press(Message::AdminEdit(admin.id)),
            button("Hapus")
                .style(button::danger)
                .on_press(Message::AdminDelete(admin.id)),
        ]
        .spacing(10),
    )
}

fn editor<'a>(
    modal: &'a Modal<AdminDraft>,
    error: Option<&FormError>,
) -> Option<Element<'a, Message>> {
    let draft = modal.draft()?;
    let editing = modal.is_editing();
    let change = |f: fn(String) -> AdminField| move |value| Message::AdminFieldChanged(f(value));

    let password_label = if editing {
        "Password (opsional)"
    } else {
        "Password"
    };
    let password = row![
        text(password_label).width(180),
        text_input("Password", &draft.password)
            .on_input(change(AdminField::Password))
            .secure(!draft.show_password)
            .width(Length::Fill),
        button(if draft.show_password {
            "Sembunyikan"
        } else {
            "Tampilkan"
        })
        .style(button::secondary)
        .on_press(Message::AdminFieldChanged(AdminField::TogglePassword)),
    ]
    .spacing(10);

    Some(card(
        column![
            text(if editing { "Edit Admin" } else { "Tambah Admin" }).size(22),
            field("Nama Lengkap", "Nama lengkap", &draft.name, change(AdminField::Name)),
            field("Email", "nama@smktelkom.sch.id", &draft.email, change(AdminField::Email)),
            password,
            row![
                text("Role").width(180),
                choices(Role::ALL, draft.role, |role| Message::AdminFieldChanged(
                    AdminField::Role(role)
                )),
            ]
            .spacing(10),
            text(draft.role.description()).size(12),
            row![
                text("Status").width(180),
                choices(Status::ALL, draft.status, |status| {
                    Message::AdminFieldChanged(AdminField::Status(status))
                }),
            ]
            .spacing(10),
            form_error(error),
            row![
                button(if editing { "Simpan" } else { "Tambah" }).on_press(Message::AdminSubmit),
                button("Batal")
                    .style(button::secondary)
                    .on_press(Message::AdminCancel),
            ]
            .spacing(10),
        ]
        .spacing(10),
    ))
}

pub fn view<'a>(
    workspace: &'a Workspace,
    query: &'a AdminQuery,
    modal: &'a Modal<AdminDraft>,
    error: Option<&FormError>,
) -> Element<'a, Message> {
    let summary = AdminSummary::of(workspace.admins());
    let stats = row![
        stat_card("Total Admin", summary.total.to_string()),
        stat_card("Super Admin", summary.super_admins.to_string()),
        stat_card("Aktif", summary.active.to_string()),
        stat_card("Nonaktif", summary.inactive.to_string()),
    ]
    .spacing(12);

    let roles = std::iter::once(Choice::All).chain(Role::ALL.map(Choice::Only));
    let statuses = std::iter::once(Choice::All).chain(Status::ALL.map(Choice::Only));
    let filters = column![
        text_input("Cari nama atau email...", &query.search)
            .on_input(Message::AdminSearchChanged)
            .width(Length::Fill),
        choices(roles, query.role, Message::AdminRoleSelected),
        choices(statuses, query.status, Message::AdminStatusSelected),
    ]
    .spacing(8);

    let list: Element<'a, Message> = match query.run(Some(workspace.admins())) {
        Listing::Unloaded => text("Memuat data...").into(),
        Listing::NoMatches => text("Tidak ada admin yang ditemukan.").into(),
        Listing::Rows(rows) => Column::with_children(rows.into_iter().map(admin_row))
            .spacing(8)
            .into(),
    };

    let mut content = column![
        row![
            header("Manajemen Admin", "Kelola akun administrator sistem"),
            button("Tambah Admin").on_press(Message::AdminCreate),
        ]
        .spacing(10),
        stats,
    ]
    .spacing(14);

    if let Some(editor) = editor(modal, error) {
        content = content.push(editor);
    }

    content = content.push(filters).push(list);

    scrollable(content).height(Length::Fill).into()
}
