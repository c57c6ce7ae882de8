use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::models::{TransactionInfo, WalletBalance};
use crate::ui::styles::{DirectionColor, UiStyleExt};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{TimeUtils, format_micro, truncate_middle};

/// Bottom panel: balance breakdown and the recent transaction list.
pub struct WalletPanel<'a> {
    balance: WalletBalance,
    history: &'a [TransactionInfo],
    pool_unpaid: u64,
}

impl<'a> WalletPanel<'a> {
    pub fn new(balance: WalletBalance, history: &'a [TransactionInfo], pool_unpaid: u64) -> Self {
        Self {
            balance,
            history,
            pool_unpaid,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label_subheader(&UI_TEXT.wl_heading);
            ui.label(
                RichText::new(format_micro(self.balance.total()))
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.separator();
            ui.metric(
                &UI_TEXT.wl_available,
                &format_micro(self.balance.available_balance),
                UI_CONFIG.colors.label,
            );
            ui.metric(
                &UI_TEXT.wl_timelocked,
                &format_micro(self.balance.timelocked_balance),
                UI_CONFIG.colors.label,
            );
            ui.metric(
                &UI_TEXT.wl_pending_in,
                &format_micro(self.balance.pending_incoming_balance),
                UI_CONFIG.colors.label,
            );
            ui.metric(
                &UI_TEXT.wl_pending_out,
                &format_micro(self.balance.pending_outgoing_balance),
                UI_CONFIG.colors.label,
            );
            if self.pool_unpaid > 0 {
                ui.metric(
                    &UI_TEXT.wl_pool_unpaid,
                    &format_micro(self.pool_unpaid),
                    UI_CONFIG.colors.label,
                );
            }
        });

        ui.add_space(4.0);
        ui.label_subdued(&UI_TEXT.wl_history_heading);

        if self.history.is_empty() {
            ui.label_subdued(&UI_TEXT.wl_history_empty);
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.label(RichText::new(&UI_TEXT.wl_col_time).strong().small());
                });
                header.col(|ui| {
                    ui.label(RichText::new(&UI_TEXT.wl_col_direction).strong().small());
                });
                header.col(|ui| {
                    ui.label(RichText::new(&UI_TEXT.wl_col_amount).strong().small());
                });
                header.col(|ui| {
                    ui.label(RichText::new(&UI_TEXT.wl_col_message).strong().small());
                });
            })
            .body(|body| {
                body.rows(18.0, self.history.len(), |mut row| {
                    let tx = &self.history[row.index()];
                    row.col(|ui| {
                        ui.label_subdued(TimeUtils::epoch_sec_to_local(tx.timestamp as i64));
                    });
                    row.col(|ui| {
                        let label = match tx.direction {
                            crate::models::TxDirection::Inbound => &UI_TEXT.wl_inbound,
                            crate::models::TxDirection::Outbound => &UI_TEXT.wl_outbound,
                        };
                        ui.label(RichText::new(label).small().color(tx.direction.color()));
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format_micro(tx.amount)).small());
                    });
                    row.col(|ui| {
                        ui.label_subdued(truncate_middle(&tx.message, 48));
                    });
                });
            });
    }
}
