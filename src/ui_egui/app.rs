use crate::models::settings::ViewerSettings;
use crate::models::user::User;
use crate::services::planner::ReadOnlyPlanner;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::WeekTheme;
use crate::ui_egui::views::utils::format_event_tooltip;
use crate::ui_egui::views::{EventSelection, SelectionListener, WeekView};

/// Keeps the most recent segment click for the details panel
#[derive(Default)]
pub struct SelectionLog {
    last: Option<EventSelection>,
}

impl SelectionLog {
    pub fn last(&self) -> Option<&EventSelection> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl SelectionListener for SelectionLog {
    fn on_event_selected(&mut self, selection: EventSelection) {
        log::info!(
            "Event '{}' selected by {} ({} users available)",
            selection.event.name,
            selection.subject,
            selection.available_users.len()
        );
        self.last = Some(selection);
    }
}

pub struct PlannerApp {
    planner: Box<dyn ReadOnlyPlanner>,
    settings: ViewerSettings,
    settings_service: SettingsService,
    /// Currently applied theme colors
    theme: WeekTheme,
    subject: Option<User>,
    selections: SelectionLog,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let users = self.planner.users();

        egui::TopBottomPanel::top("planner_toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.render_user_picker(ui, &users);
                ui.separator();
                if ui
                    .checkbox(&mut self.settings.host_view, "Host view")
                    .changed()
                {
                    log::debug!("Host view set to {}", self.settings.host_view);
                }
            });
        });

        if let Some(selection) = self.selections.last() {
            let details = format_event_tooltip(&selection.event);
            let mut dismissed = false;
            egui::TopBottomPanel::bottom("selection_details").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(details);
                    if ui.button("Close").clicked() {
                        dismissed = true;
                    }
                });
            });
            if dismissed {
                self.selections.clear();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.subject.clone() {
            Some(subject) => {
                // Rebuilt every frame; nothing from the previous layout is reused
                let schedule = self.planner.schedule_for(&subject.name);
                WeekView::new(&schedule, &subject, &users, &self.theme)
                    .host_view(self.settings.host_view)
                    .show(ui, &mut self.selections);
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("No users in this planner");
                });
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.default_user = self.subject.as_ref().map(|user| user.name.clone());
        if let Err(err) = self.settings_service.save(&self.settings) {
            log::error!("Failed to save settings: {:#}", err);
        }
    }
}

impl PlannerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        planner: Box<dyn ReadOnlyPlanner>,
        settings: ViewerSettings,
        settings_service: SettingsService,
    ) -> Self {
        let theme = WeekTheme::from_settings(&settings);
        theme.apply_to_context(&cc.egui_ctx);

        let subject = resolve_subject(&planner.users(), settings.default_user.as_deref());
        match &subject {
            Some(user) => log::info!("Showing schedule for {}", user),
            None => log::warn!("Planner has no users; nothing to show"),
        }

        Self {
            planner,
            settings,
            settings_service,
            theme,
            subject,
            selections: SelectionLog::default(),
        }
    }

    fn render_user_picker(&mut self, ui: &mut egui::Ui, users: &[User]) {
        ui.label("User:");
        let selected_text = self
            .subject
            .as_ref()
            .map(User::to_string)
            .unwrap_or_else(|| "(none)".to_string());

        egui::ComboBox::from_id_source("user_select")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for user in users {
                    let chosen = Some(user.clone());
                    if ui
                        .selectable_label(self.subject == chosen, user.to_string())
                        .clicked()
                    {
                        log::debug!("Switched schedule to {}", user);
                        self.subject = chosen;
                        self.selections.clear();
                    }
                }
            });
    }
}

/// The preferred user when the roster has them, else the first user
pub fn resolve_subject(users: &[User], preferred: Option<&str>) -> Option<User> {
    preferred
        .and_then(|name| users.iter().find(|user| user.name == name))
        .or_else(|| users.first())
        .cloned()
}
