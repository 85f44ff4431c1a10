//! [`Command`] for sending a validated [`Demand`].

use common::DateTime;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        demand::{InvalidTransition, Status},
        Demand,
    },
    Service,
};

use super::Command;

/// [`Command`] for sending a [`Status::Validated`] [`Demand`] to its client.
///
/// Moves the [`Demand`] to the terminal [`Status::Sent`], freezing its
/// assignments and prices.
#[derive(Clone, Debug)]
pub struct SendDemand {
    /// [`Demand`] to send.
    pub demand: Demand,
}

impl Command<SendDemand> for Service {
    type Ok = Demand;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SendDemand) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SendDemand { mut demand } = cmd;

        demand
            .status
            .ensure_transition(Status::Sent)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        demand.status = Status::Sent;
        demand.updated_at = DateTime::now().coerce();

        log::info!("`Demand(id: {})` sent to its client", demand.id);

        Ok(demand)
    }
}

/// Error of [`SendDemand`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Demand`] cannot move to [`Status::Sent`] from its current
    /// [`Status`].
    #[display("{_0}")]
    Transition(InvalidTransition),
}

#[cfg(test)]
mod spec {
    use futures::executor::block_on;

    use crate::{
        command::{SubmitDemand, ValidateDemand},
        domain::{
            demand::{AgentId, Status},
            Demand,
        },
        infra::catalog::sample::{client_demand, sample, Sample},
        Command as _,
    };

    use super::{ExecutionError as E, SendDemand};

    fn validated(s: &Sample) -> Demand {
        use crate::command::{LegAssignment, RoomChoice};

        let pending = block_on(s.service.execute(SubmitDemand {
            demand: client_demand(s),
        }))
        .unwrap();
        block_on(s.service.execute(ValidateDemand {
            demand: pending,
            assignments: vec![LegAssignment {
                hotel_id: s.riad,
                rooms: vec![RoomChoice {
                    room_type_id: s.riad_double,
                    count: 2,
                }],
            }],
            transport_id: None,
            services: vec![],
            benefit: None,
            tax: None,
            agent_id: AgentId::new(),
        }))
        .unwrap()
    }

    #[test]
    fn sends_validated_demand() {
        let s = sample();
        let demand = validated(&s);
        let total = demand.total_price;

        let sent =
            block_on(s.service.execute(SendDemand { demand })).unwrap();

        assert_eq!(sent.status, Status::Sent);
        assert_eq!(sent.total_price, total);
    }

    #[test]
    fn rejects_pending_demand() {
        let s = sample();
        let pending = block_on(s.service.execute(SubmitDemand {
            demand: client_demand(&s),
        }))
        .unwrap();

        let e = block_on(s.service.execute(SendDemand { demand: pending }))
            .unwrap_err();
        assert!(matches!(
            e.as_ref(),
            E::Transition(t) if t.from == Status::Pending,
        ));
    }

    #[test]
    fn rejects_resending() {
        let s = sample();
        let sent = block_on(s.service.execute(SendDemand {
            demand: validated(&s),
        }))
        .unwrap();

        let e = block_on(s.service.execute(SendDemand { demand: sent }))
            .unwrap_err();
        assert!(matches!(
            e.as_ref(),
            E::Transition(t) if t.from == Status::Sent,
        ));
    }
}
