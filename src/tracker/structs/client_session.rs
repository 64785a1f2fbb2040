use std::sync::Arc;
use crate::accounts::structs::identity::Identity;
use crate::registry::structs::peer_record::PeerRecord;
use crate::tracker::structs::session_handle::SessionHandle;
use crate::tracker::structs::tracker_state::TrackerState;
use crate::transport::structs::tcp_transport::TcpTransport;

/// One control connection, from accept to cleanup.
///
/// Session state is `identity` (unauthenticated until `LOGIN`) and `peer`
/// (unregistered until `REGISTER`); every verb is gated on those two.
pub struct ClientSession {
    pub(crate) state: Arc<TrackerState>,
    pub(crate) transport: TcpTransport,
    pub(crate) identity: Option<Identity>,
    pub(crate) peer: Option<PeerRecord>,
    pub(crate) handle: Option<Arc<SessionHandle>>,
}
