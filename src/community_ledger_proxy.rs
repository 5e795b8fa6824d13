// Direct calls: the immediate caller is the acting identity.

use multiversx_sc::proxy_imports::*;

use crate::types::{Proposal, ProposalCategory, VoteOption};

pub struct CommunityLedgerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CommunityLedgerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CommunityLedgerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CommunityLedgerProxyMethods { wrapped_tx: tx }
    }
}

pub struct CommunityLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CommunityLedgerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        monthly_quota: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&monthly_quota)
            .original_result()
    }
}

impl<Env, From, To, Gas> CommunityLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_manager<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_manager: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setManager")
            .argument(&new_manager)
            .original_result()
    }

    pub fn set_adapter<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        adapter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAdapter")
            .argument(&adapter)
            .original_result()
    }

    pub fn add_resident<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u32>,
    >(
        self,
        resident: Arg0,
        residence: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addResident")
            .argument(&resident)
            .argument(&residence)
            .original_result()
    }

    pub fn remove_resident<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        resident: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeResident")
            .argument(&resident)
            .original_result()
    }

    pub fn set_counselor<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        resident: Arg0,
        is_counselor: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setCounselor")
            .argument(&resident)
            .argument(&is_counselor)
            .original_result()
    }

    pub fn pay_quota<Arg0: ProxyArg<u32>>(
        self,
        residence: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("payQuota")
            .argument(&residence)
            .original_result()
    }

    pub fn create_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ProposalCategory>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        title: Arg0,
        description: Arg1,
        category: Arg2,
        amount: Arg3,
        responsible: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createProposal")
            .argument(&title)
            .argument(&description)
            .argument(&category)
            .argument(&amount)
            .argument(&responsible)
            .original_result()
    }

    pub fn edit_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        title: Arg0,
        description: Arg1,
        amount: Arg2,
        responsible: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("editProposal")
            .argument(&title)
            .argument(&description)
            .argument(&amount)
            .argument(&responsible)
            .original_result()
    }

    pub fn remove_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeProposal")
            .argument(&title)
            .original_result()
    }

    pub fn open_vote<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("openVote")
            .argument(&title)
            .original_result()
    }

    pub fn vote<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<VoteOption>,
    >(
        self,
        title: Arg0,
        option: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&title)
            .argument(&option)
            .original_result()
    }

    pub fn close_vote<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("closeVote")
            .argument(&title)
            .original_result()
    }

    pub fn transfer<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        title: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transfer")
            .argument(&title)
            .argument(&amount)
            .original_result()
    }

    pub fn get_manager(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getManager")
            .original_result()
    }

    pub fn get_adapter(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdapter")
            .original_result()
    }

    pub fn is_resident<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isResident")
            .argument(&address)
            .original_result()
    }

    pub fn is_counselor<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isCounselor")
            .argument(&address)
            .original_result()
    }

    pub fn is_residence<Arg0: ProxyArg<u32>>(
        self,
        residence: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isResidence")
            .argument(&residence)
            .original_result()
    }

    pub fn get_residences(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getResidences")
            .original_result()
    }

    pub fn get_residence<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<u32>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getResidence")
            .argument(&address)
            .original_result()
    }

    pub fn get_residence_occupant<Arg0: ProxyArg<u32>>(
        self,
        residence: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getResidenceOccupant")
            .argument(&residence)
            .original_result()
    }

    pub fn get_monthly_quota(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMonthlyQuota")
            .original_result()
    }

    pub fn get_last_payment<Arg0: ProxyArg<u32>>(
        self,
        residence: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLastPayment")
            .argument(&residence)
            .original_result()
    }

    pub fn is_quota_paid<Arg0: ProxyArg<u32>>(
        self,
        residence: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isQuotaPaid")
            .argument(&residence)
            .original_result()
    }

    pub fn get_current_month(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentMonth")
            .original_result()
    }

    pub fn is_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isProposal")
            .argument(&title)
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&title)
            .original_result()
    }

    pub fn get_proposals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .original_result()
    }

    pub fn get_votes<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        title: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotes")
            .argument(&title)
            .original_result()
    }

    pub fn get_vote<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        title: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, VoteOption> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVote")
            .argument(&title)
            .argument(&voter)
            .original_result()
    }

    pub fn has_voted<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        title: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&title)
            .argument(&voter)
            .original_result()
    }

    pub fn get_quorum(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getQuorum")
            .original_result()
    }

    pub fn get_treasury_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTreasuryBalance")
            .original_result()
    }
}
