#![no_std]

multiversx_sc::imports!();

pub mod types;
pub mod voting_proxy;

use types::{Proposal, Voter, WorkflowStatus};

// ============================================================
// Constants
// ============================================================

/// Sentinel stored at proposal id 0 when proposal registration opens
const GENESIS_DESCRIPTION: &[u8] = b"GENESIS";

const ERR_NOT_A_VOTER: &str = "You're not a voter";
const ERR_ALREADY_REGISTERED: &str = "Already registered";
const ERR_VOTERS_REGISTRATION_CLOSED: &str = "Voters registration is not open yet";
const ERR_PROPOSALS_NOT_ALLOWED: &str = "Proposals are not allowed yet";
const ERR_VOTING_NOT_STARTED: &str = "Voting session havent started yet";
const ERR_EMPTY_PROPOSAL: &str = "Vous ne pouvez pas ne rien proposer";
const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
const ERR_ALREADY_VOTED: &str = "You have already voted";

// ============================================================
// Contract
// ============================================================

/// Single-owner voting workflow: voters are registered, proposals collected,
/// votes cast, then tallied. Every phase change is driven by the owner.
#[multiversx_sc::contract]
pub trait Voting {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the owner and the only administrator.
    #[init]
    fn init(&self) {
        self.workflow_status().set(WorkflowStatus::RegisteringVoters);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: addVoter
    // ========================================================

    #[only_owner]
    #[endpoint(addVoter)]
    fn add_voter(&self, voter_address: ManagedAddress) {
        require!(
            self.workflow_status().get() == WorkflowStatus::RegisteringVoters,
            ERR_VOTERS_REGISTRATION_CLOSED
        );
        require!(
            self.voters(&voter_address).is_empty(),
            ERR_ALREADY_REGISTERED
        );

        self.voters(&voter_address).set(Voter::registered());

        self.voter_registered_event(&voter_address);
    }

    // ========================================================
    // ENDPOINT: addProposal
    // Any registered voter, while proposal registration is open.
    // ========================================================

    #[endpoint(addProposal)]
    fn add_proposal(&self, description: ManagedBuffer) -> u64 {
        self.require_registered_voter();
        require!(
            self.workflow_status().get() == WorkflowStatus::ProposalsRegistrationStarted,
            ERR_PROPOSALS_NOT_ALLOWED
        );
        require!(!description.is_empty(), ERR_EMPTY_PROPOSAL);

        let proposal_id = self.proposals().len() as u64;
        self.proposals().push(&Proposal {
            description,
            vote_count: 0,
        });

        self.proposal_registered_event(proposal_id);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: setVote
    // One vote per registered voter, for any existing id
    // (GENESIS included).
    // ========================================================

    #[endpoint(setVote)]
    fn set_vote(&self, proposal_id: u64) {
        let caller = self.require_registered_voter();
        require!(
            self.workflow_status().get() == WorkflowStatus::VotingSessionStarted,
            ERR_VOTING_NOT_STARTED
        );
        require!(
            proposal_id < self.proposals().len() as u64,
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut voter = self.voters(&caller).get();
        require!(!voter.has_voted, ERR_ALREADY_VOTED);

        let slot = proposal_slot(proposal_id);
        let mut proposal = self.proposals().get(slot);
        proposal.vote_count += 1;
        self.proposals().set(slot, &proposal);

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        self.voters(&caller).set(&voter);

        self.voted_event(&caller, proposal_id);
    }

    // ========================================================
    // ENDPOINTS: workflow transitions (owner only)
    // ========================================================

    #[only_owner]
    #[endpoint(startProposalsRegistering)]
    fn start_proposals_registering(&self) {
        let next = self.advance_workflow(WorkflowStatus::RegisteringVoters);

        self.proposals().push(&Proposal {
            description: ManagedBuffer::from(GENESIS_DESCRIPTION),
            vote_count: 0,
        });

        self.workflow_status_change_event(WorkflowStatus::RegisteringVoters, next);
    }

    #[only_owner]
    #[endpoint(endProposalsRegistering)]
    fn end_proposals_registering(&self) {
        let next = self.advance_workflow(WorkflowStatus::ProposalsRegistrationStarted);
        self.workflow_status_change_event(WorkflowStatus::ProposalsRegistrationStarted, next);
    }

    #[only_owner]
    #[endpoint(startVotingSession)]
    fn start_voting_session(&self) {
        let next = self.advance_workflow(WorkflowStatus::ProposalsRegistrationEnded);
        self.workflow_status_change_event(WorkflowStatus::ProposalsRegistrationEnded, next);
    }

    #[only_owner]
    #[endpoint(endVotingSession)]
    fn end_voting_session(&self) {
        let next = self.advance_workflow(WorkflowStatus::VotingSessionStarted);
        self.workflow_status_change_event(WorkflowStatus::VotingSessionStarted, next);
    }

    // ========================================================
    // ENDPOINT: tallyVotes
    // Strictly greater count replaces the running winner, so the
    // lowest id wins a tie.
    // ========================================================

    #[only_owner]
    #[endpoint(tallyVotes)]
    fn tally_votes(&self) {
        let next = self.advance_workflow(WorkflowStatus::VotingSessionEnded);

        let mut winning_id = 0u64;
        let mut winning_count = 0u64;
        for (index, proposal) in self.proposals().iter().enumerate() {
            if proposal.vote_count > winning_count {
                winning_count = proposal.vote_count;
                winning_id = index as u64;
            }
        }
        self.winning_proposal_id().set(winning_id);

        self.workflow_status_change_event(WorkflowStatus::VotingSessionEnded, next);
    }

    // ========================================================
    // INTERNAL: access and transition checks
    // ========================================================

    fn require_registered_voter(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(!self.voters(&caller).is_empty(), ERR_NOT_A_VOTER);
        caller
    }

    /// Moves the workflow one step forward from `from`, failing with the
    /// edge's message when the current status is anything else.
    fn advance_workflow(&self, from: WorkflowStatus) -> WorkflowStatus {
        let err_msg = from.advance_error();
        require!(self.workflow_status().get() == from, err_msg);

        let next = match from.next() {
            Some(next) => next,
            None => sc_panic!(err_msg),
        };
        self.workflow_status().set(next);
        next
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getVoter)]
    fn get_voter(&self, voter_address: ManagedAddress) -> Voter {
        self.require_registered_voter();
        let mapper = self.voters(&voter_address);
        // unknown addresses read as an unregistered record
        if mapper.is_empty() {
            return Voter::default();
        }
        mapper.get()
    }

    #[view(getOneProposal)]
    fn get_one_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_registered_voter();
        require!(
            proposal_id < self.proposals().len() as u64,
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals().get(proposal_slot(proposal_id))
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposals().len() as u64
    }

    #[view(owner)]
    fn owner(&self) -> ManagedAddress {
        self.blockchain().get_owner_address()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("voterRegistered")]
    fn voter_registered_event(&self, #[indexed] voter_address: &ManagedAddress);

    #[event("proposalRegistered")]
    fn proposal_registered_event(&self, #[indexed] proposal_id: u64);

    #[event("voted")]
    fn voted_event(&self, #[indexed] voter: &ManagedAddress, #[indexed] proposal_id: u64);

    #[event("workflowStatusChange")]
    fn workflow_status_change_event(
        &self,
        #[indexed] previous_status: WorkflowStatus,
        #[indexed] new_status: WorkflowStatus,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(workflowStatus)]
    #[storage_mapper("workflowStatus")]
    fn workflow_status(&self) -> SingleValueMapper<WorkflowStatus>;

    #[storage_mapper("voters")]
    fn voters(&self, voter_address: &ManagedAddress) -> SingleValueMapper<Voter>;

    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<Proposal<Self::Api>>;

    /// Zero until votes are tallied.
    #[view(winningProposalID)]
    #[storage_mapper("winningProposalId")]
    fn winning_proposal_id(&self) -> SingleValueMapper<u64>;
}

/// `VecMapper` storage is 1-based; proposal ids are 0-based.
fn proposal_slot(proposal_id: u64) -> usize {
    proposal_id as usize + 1
}
