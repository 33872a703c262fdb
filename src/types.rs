multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Workflow Status — the six voting phases, in order
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorkflowStatus {
    /// Owner registers voters.
    RegisteringVoters,
    /// Registered voters submit proposals. GENESIS sits at index 0.
    ProposalsRegistrationStarted,
    ProposalsRegistrationEnded,
    /// Each registered voter casts one vote.
    VotingSessionStarted,
    VotingSessionEnded,
    /// Winner computed. Terminal state.
    VotesTallied,
}

impl WorkflowStatus {
    /// Successor of this status. `None` once votes are tallied.
    pub fn next(&self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            },
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    /// Message returned when the edge leaving `self` is requested while the
    /// contract sits in any other status. `VotesTallied` has no outgoing edge
    /// and no endpoint asks for it; it shares the tally message.
    pub fn advance_error(&self) -> &'static str {
        match self {
            WorkflowStatus::RegisteringVoters => "Registering proposals cant be started now",
            WorkflowStatus::ProposalsRegistrationStarted => {
                "Registering proposals havent started yet"
            },
            WorkflowStatus::ProposalsRegistrationEnded => {
                "Registering proposals phase is not finished"
            },
            WorkflowStatus::VotingSessionStarted => "Voting session havent started yet",
            WorkflowStatus::VotingSessionEnded | WorkflowStatus::VotesTallied => {
                "Current status is not voting session ended"
            },
        }
    }
}

// ============================================================
// Voter — registry entry, one per address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Default, PartialEq, Eq, Debug)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: u64,
}

impl Voter {
    pub fn registered() -> Self {
        Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

// ============================================================
// Proposal — id is the insertion index
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub description: ManagedBuffer<M>,
    pub vote_count: u64,
}
