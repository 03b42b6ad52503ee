//! Loaded configuration and stored state for one command invocation.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use cupom_core::config::CupomConfig;
use cupom_core::coupon::{self, CouponKind};
use cupom_core::derive_display_list;
use cupom_core::receipt::{events_receipt, Receipt, StoreInfo};
use cupom_core::store::{AppState, FileStore};
use tracing::debug;

pub struct Session {
    pub config: CupomConfig,
    pub state: AppState,
    pub today: NaiveDate,
    store: FileStore,
}

impl Session {
    pub fn open() -> Result<Self> {
        let config = CupomConfig::load()?;
        let store = config.store();
        let today = Local::now().date_naive();
        let state = AppState::load(&store, today);

        debug!(path = %store.path().display(), events = state.events.len(), "loaded state");

        Ok(Session::new(config, state, today, store))
    }

    pub fn new(config: CupomConfig, state: AppState, today: NaiveDate, store: FileStore) -> Self {
        Session {
            config,
            state,
            today,
            store,
        }
    }

    /// Persist the state. Failures are logged, not returned.
    pub fn save(&mut self) {
        self.state.save(&mut self.store);
    }

    /// The `--unify` flag, falling back to the configured default.
    pub fn unify(&self, flag: bool) -> bool {
        flag || self.config.unify_themed_saturdays
    }

    pub fn store_info(&self) -> StoreInfo {
        StoreInfo {
            brand: self.config.brand.clone(),
            store_name: self.state.store_name.clone(),
            whatsapp: self.state.whatsapp.clone(),
            instagram: self.state.instagram.clone(),
        }
    }

    /// Build a coupon layout from the current state.
    pub fn layout(&self, kind: CouponKind, unify: bool) -> Receipt {
        let store_name = &self.state.store_name;
        match kind {
            CouponKind::Events => {
                let events = derive_display_list(self.state.events.records(), unify);
                events_receipt(&self.store_info(), &events)
            }
            CouponKind::Discount => coupon::discount_coupon(store_name),
            CouponKind::PickupInfo => coupon::pickup_info_coupon(&self.config.brand, store_name),
            CouponKind::ChristmasLetter => coupon::christmas_letter_coupon(store_name),
        }
    }
}
