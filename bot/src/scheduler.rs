use crate::trader::Trader;
use anyhow::Result;
use log::error;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::future::Future;
use tokio_cron_scheduler::{Job, JobScheduler};

const BUY_BUDGET: Decimal = dec!(1000);

/// Drives the recurring trading passes. Jobs fire on independent timers;
/// passes due together may overlap, sharing nothing but the client.
pub(crate) struct Scheduler {
    trader: Trader,
    scheduler: JobScheduler,
}

impl Scheduler {
    pub(crate) async fn new(trader: Trader) -> Result<Self> {
        let scheduler = JobScheduler::new().await?;
        Ok(Scheduler { trader, scheduler })
    }

    /// A failed pass is logged under `name`; it never unschedules the job.
    async fn schedule_task<F, Fut>(&self, name: &'static str, schedule: &str, task: F) -> Result<()>
    where
        F: Fn(Trader) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let trader_clone = self.trader.clone();

        self.scheduler
            .add(Job::new_async(schedule, move |_uuid, _l| {
                let trader = trader_clone.clone();
                let fut = task(trader);
                Box::pin(async move {
                    if let Err(e) = fut.await {
                        error!("Error executing {name} pass: {e:?}");
                    }
                })
            })?)
            .await?;

        Ok(())
    }

    pub(crate) async fn schedule_tasks(&self) -> Result<()> {
        self.schedule_task("sell", "every 10 minutes", |trader| async move {
            trader.sell_profitable_cards().await
        })
        .await?;

        self.schedule_task("buy", "every 6 hours", |trader| async move {
            trader.buy_affordable_cards(BUY_BUDGET).await
        })
        .await?;

        Ok(())
    }

    pub(crate) async fn start(&self) -> Result<()> {
        self.schedule_tasks().await?;
        Ok(self.scheduler.start().await?)
    }

    pub(crate) async fn shutdown(mut self) -> Result<()> {
        Ok(self.scheduler.shutdown().await?)
    }
}
