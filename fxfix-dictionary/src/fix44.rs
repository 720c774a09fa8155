/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Built-in FIX 4.4 base field table.
//!
//! This is tier 1 of the tag dictionary: the standard-specification fields a
//! decoder needs for FX order, execution, quote, and market-data traffic.
//! Curated FX extensions overlay this table in tier 2 (see [`crate::fx`]).

use crate::schema::FieldDef;
use fxfix_core::types::FieldType;

/// Returns the FIX 4.4 base field definitions.
#[must_use]
pub fn base_fields() -> Vec<FieldDef> {
    vec![
        // Header fields
        FieldDef::new(8, "BeginString", FieldType::String)
            .with_description("FIX protocol version identifier (e.g., FIX.4.4)."),
        FieldDef::new(9, "BodyLength", FieldType::Length).with_description(
            "Message body length in bytes, counted from after the tag 9 delimiter to before tag 10.",
        ),
        FieldDef::new(35, "MsgType", FieldType::String)
            .with_description("Message type identifier.")
            .with_values([
                ("0", "Heartbeat"),
                ("1", "TestRequest"),
                ("2", "ResendRequest"),
                ("3", "Reject"),
                ("4", "SequenceReset"),
                ("5", "Logout"),
                ("6", "IOI"),
                ("7", "Advertisement"),
                ("8", "ExecutionReport"),
                ("9", "OrderCancelReject"),
                ("A", "Logon"),
                ("B", "News"),
                ("C", "Email"),
                ("D", "NewOrderSingle"),
                ("E", "NewOrderList"),
                ("F", "OrderCancelRequest"),
                ("G", "OrderCancelReplaceRequest"),
                ("H", "OrderStatusRequest"),
                ("J", "AllocationInstruction"),
                ("P", "AllocationInstructionAck"),
                ("Q", "DontKnowTrade"),
                ("R", "QuoteRequest"),
                ("S", "Quote"),
                ("V", "MarketDataRequest"),
                ("W", "MarketDataSnapshotFullRefresh"),
                ("X", "MarketDataIncrementalRefresh"),
                ("Y", "MarketDataRequestReject"),
                ("Z", "QuoteCancel"),
                ("a", "QuoteStatusRequest"),
                ("b", "MassQuoteAck"),
                ("i", "MassQuote"),
                ("j", "BusinessMessageReject"),
                ("AE", "TradeCaptureReport"),
                ("AR", "TradeCaptureReportRequest"),
            ]),
        FieldDef::new(34, "MsgSeqNum", FieldType::SeqNum)
            .with_description("Message sequence number within the session."),
        FieldDef::new(49, "SenderCompID", FieldType::String)
            .with_description("Sender's company/system identifier."),
        FieldDef::new(56, "TargetCompID", FieldType::String)
            .with_description("Target's company/system identifier."),
        FieldDef::new(52, "SendingTime", FieldType::UtcTimestamp)
            .with_description("Message sending timestamp in UTC."),
        FieldDef::new(50, "SenderSubID", FieldType::String)
            .with_description("Sender's sub-identifier (desk, trader, application)."),
        FieldDef::new(57, "TargetSubID", FieldType::String)
            .with_description("Target's sub-identifier."),
        FieldDef::new(115, "OnBehalfOfCompID", FieldType::String)
            .with_description("Firm the message is sent on behalf of."),
        FieldDef::new(116, "OnBehalfOfSubID", FieldType::String),
        FieldDef::new(128, "DeliverToCompID", FieldType::String)
            .with_description("Final destination when routed through intermediaries."),
        FieldDef::new(129, "DeliverToSubID", FieldType::String),
        FieldDef::new(43, "PossDupFlag", FieldType::Boolean)
            .with_description("Possible duplicate of a previously sent message.")
            .with_values([("Y", "Yes"), ("N", "No")]),
        FieldDef::new(97, "PossResend", FieldType::Boolean)
            .with_values([("Y", "Yes"), ("N", "No")]),
        FieldDef::new(122, "OrigSendingTime", FieldType::UtcTimestamp)
            .with_description("Original sending time when PossDupFlag=Y."),
        // Order/Trade fields
        FieldDef::new(1, "Account", FieldType::String)
            .with_description("Trading account for booking and P&L attribution."),
        FieldDef::new(11, "ClOrdID", FieldType::String)
            .with_description("Client-assigned unique order identifier."),
        FieldDef::new(37, "OrderID", FieldType::String)
            .with_description("Venue-assigned unique order identifier."),
        FieldDef::new(41, "OrigClOrdID", FieldType::String)
            .with_description("Original ClOrdID when amending or canceling."),
        FieldDef::new(17, "ExecID", FieldType::String)
            .with_description("Unique identifier of this execution report."),
        FieldDef::new(19, "ExecRefID", FieldType::String),
        FieldDef::new(20, "ExecTransType", FieldType::Char).with_values([
            ("0", "New"),
            ("1", "Cancel"),
            ("2", "Correct"),
            ("3", "Status"),
        ]),
        FieldDef::new(39, "OrdStatus", FieldType::Char)
            .with_description("Current state of the order in its lifecycle.")
            .with_values([
                ("0", "New"),
                ("1", "PartiallyFilled"),
                ("2", "Filled"),
                ("3", "DoneForDay"),
                ("4", "Canceled"),
                ("5", "Replaced"),
                ("6", "PendingCancel"),
                ("7", "Stopped"),
                ("8", "Rejected"),
                ("9", "Suspended"),
                ("A", "PendingNew"),
                ("B", "Calculated"),
                ("C", "Expired"),
                ("E", "PendingReplace"),
            ]),
        FieldDef::new(40, "OrdType", FieldType::Char)
            .with_description("How the order should be executed.")
            .with_values([
                ("1", "Market"),
                ("2", "Limit"),
                ("3", "Stop"),
                ("4", "StopLimit"),
                ("C", "ForexMarket"),
                ("D", "PreviouslyQuoted"),
                ("F", "ForexLimit"),
                ("G", "ForexSwap"),
                ("H", "ForexPreviouslyQuoted"),
                ("P", "Pegged"),
            ]),
        FieldDef::new(54, "Side", FieldType::Char)
            .with_description("Direction of the trade for the base currency.")
            .with_values([
                ("1", "Buy"),
                ("2", "Sell"),
                ("3", "BuyMinus"),
                ("4", "SellPlus"),
                ("5", "SellShort"),
                ("6", "SellShortExempt"),
                ("7", "Undisclosed"),
                ("8", "Cross"),
                ("9", "CrossShort"),
                ("B", "AsDefined"),
                ("C", "Opposite"),
            ]),
        FieldDef::new(55, "Symbol", FieldType::String)
            .with_description("Instrument symbol; for FX, the currency pair (e.g., EUR/USD)."),
        FieldDef::new(65, "SymbolSfx", FieldType::String),
        FieldDef::new(48, "SecurityID", FieldType::String),
        FieldDef::new(22, "SecurityIDSource", FieldType::String),
        FieldDef::new(106, "Issuer", FieldType::String),
        FieldDef::new(107, "SecurityDesc", FieldType::String),
        FieldDef::new(15, "Currency", FieldType::Currency)
            .with_description("Dealt currency of the order or trade."),
        FieldDef::new(120, "SettlCurrency", FieldType::Currency)
            .with_description("Currency in which the trade settles."),
        FieldDef::new(38, "OrderQty", FieldType::Qty)
            .with_description("Ordered quantity in dealt-currency units."),
        FieldDef::new(44, "Price", FieldType::Price).with_description("Limit price of the order."),
        FieldDef::new(99, "StopPx", FieldType::Price),
        FieldDef::new(32, "LastQty", FieldType::Qty)
            .with_description("Quantity bought/sold on this fill."),
        FieldDef::new(31, "LastPx", FieldType::Price).with_description("Price of this fill."),
        FieldDef::new(14, "CumQty", FieldType::Qty)
            .with_description("Cumulative filled quantity for the order."),
        FieldDef::new(151, "LeavesQty", FieldType::Qty)
            .with_description("Quantity still open for execution."),
        FieldDef::new(6, "AvgPx", FieldType::Price)
            .with_description("Average fill price across all executions."),
        FieldDef::new(150, "ExecType", FieldType::Char)
            .with_description("What triggered this execution report.")
            .with_values([
                ("0", "New"),
                ("1", "PartialFill"),
                ("2", "Fill"),
                ("3", "DoneForDay"),
                ("4", "Canceled"),
                ("5", "Replace"),
                ("6", "PendingCancel"),
                ("8", "Rejected"),
                ("A", "PendingNew"),
                ("C", "Expired"),
                ("D", "Restated"),
                ("E", "PendingReplace"),
                ("F", "Trade"),
                ("G", "TradeCorrect"),
                ("H", "TradeCancel"),
                ("I", "OrderStatus"),
            ]),
        FieldDef::new(103, "OrdRejReason", FieldType::Int).with_values([
            ("0", "BrokerOption"),
            ("1", "UnknownSymbol"),
            ("2", "ExchangeClosed"),
            ("3", "OrderExceedsLimit"),
            ("4", "TooLateToEnter"),
            ("5", "UnknownOrder"),
            ("6", "DuplicateOrder"),
            ("13", "IncorrectQuantity"),
            ("15", "UnknownAccount"),
            ("99", "Other"),
        ]),
        // Settlement fields
        FieldDef::new(63, "SettlType", FieldType::Char)
            .with_description("Settlement period of the trade or near leg.")
            .with_values([
                ("0", "Regular"),
                ("1", "Cash"),
                ("2", "NextDay"),
                ("3", "TPlus2"),
                ("4", "TPlus3"),
                ("5", "TPlus4"),
                ("6", "Future"),
                ("7", "WhenIssued"),
                ("8", "SellersOption"),
                ("9", "TPlus5"),
                ("B", "BrokenDate"),
                ("C", "FXSpot"),
            ]),
        FieldDef::new(64, "SettlDate", FieldType::LocalMktDate)
            .with_description("Settlement (value) date, format YYYYMMDD."),
        FieldDef::new(193, "SettlDate2", FieldType::LocalMktDate)
            .with_description("Settlement date of the far leg for FX Swaps."),
        FieldDef::new(192, "OrderQty2", FieldType::Qty)
            .with_description("Notional amount of the far leg for FX Swaps."),
        FieldDef::new(194, "LastSpotRate", FieldType::Price)
            .with_description("Spot rate used as reference for forward calculations."),
        FieldDef::new(195, "LastForwardPoints", FieldType::PriceOffset)
            .with_description("Difference between forward rate and spot rate, in points."),
        // Time fields
        FieldDef::new(60, "TransactTime", FieldType::UtcTimestamp)
            .with_description("When the order or trade was created or executed."),
        FieldDef::new(75, "TradeDate", FieldType::LocalMktDate)
            .with_description("Business date of the trade."),
        FieldDef::new(59, "TimeInForce", FieldType::Char).with_values([
            ("0", "Day"),
            ("1", "GoodTillCancel"),
            ("3", "ImmediateOrCancel"),
            ("4", "FillOrKill"),
            ("6", "GoodTillDate"),
        ]),
        FieldDef::new(126, "ExpireTime", FieldType::UtcTimestamp),
        FieldDef::new(432, "ExpireDate", FieldType::LocalMktDate),
        // Text/misc fields
        FieldDef::new(58, "Text", FieldType::String).with_description("Free-format text."),
        FieldDef::new(354, "EncodedTextLen", FieldType::Length),
        FieldDef::new(355, "EncodedText", FieldType::Data),
        FieldDef::new(7, "BeginSeqNo", FieldType::SeqNum),
        FieldDef::new(16, "EndSeqNo", FieldType::SeqNum),
        FieldDef::new(36, "NewSeqNo", FieldType::SeqNum),
        FieldDef::new(45, "RefSeqNum", FieldType::SeqNum),
        FieldDef::new(98, "EncryptMethod", FieldType::Int).with_values([("0", "None")]),
        FieldDef::new(108, "HeartBtInt", FieldType::Int)
            .with_description("Seconds between heartbeat messages."),
        FieldDef::new(112, "TestReqID", FieldType::String),
        FieldDef::new(141, "ResetSeqNumFlag", FieldType::Boolean)
            .with_values([("Y", "Yes"), ("N", "No")]),
        // Trailer
        FieldDef::new(10, "CheckSum", FieldType::String)
            .with_description("Three-digit checksum: sum of message bytes mod 256."),
        // Quote fields
        FieldDef::new(117, "QuoteID", FieldType::String),
        FieldDef::new(131, "QuoteReqID", FieldType::String)
            .with_description("Links quote responses back to the original request."),
        FieldDef::new(132, "BidPx", FieldType::Price)
            .with_description("Price at which the quoting party buys the base currency."),
        FieldDef::new(133, "OfferPx", FieldType::Price)
            .with_description("Price at which the quoting party sells the base currency."),
        FieldDef::new(134, "BidSize", FieldType::Qty),
        FieldDef::new(135, "OfferSize", FieldType::Qty),
        FieldDef::new(188, "BidSpotRate", FieldType::Price),
        FieldDef::new(189, "BidForwardPoints", FieldType::PriceOffset),
        FieldDef::new(190, "OfferSpotRate", FieldType::Price),
        FieldDef::new(191, "OfferForwardPoints", FieldType::PriceOffset),
        FieldDef::new(642, "SettlBidForwardPoints2", FieldType::PriceOffset)
            .with_description("Far leg bid forward points for FX Swaps."),
        FieldDef::new(643, "SettlOfferForwardPoints2", FieldType::PriceOffset)
            .with_description("Far leg offer forward points for FX Swaps."),
        FieldDef::new(645, "MidPx", FieldType::Price),
        FieldDef::new(646, "MidYield", FieldType::Percentage),
        FieldDef::new(297, "QuoteAckStatus", FieldType::Int).with_values([
            ("0", "Accepted"),
            ("5", "Rejected"),
            ("7", "Expired"),
            ("10", "Pending"),
        ]),
        FieldDef::new(300, "QuoteRejectReason", FieldType::Int).with_values([
            ("1", "UnknownSymbol"),
            ("5", "UnknownQuote"),
            ("6", "DuplicateQuote"),
            ("8", "InvalidPrice"),
            ("99", "Other"),
        ]),
        // Parties
        FieldDef::new(453, "NoPartyIDs", FieldType::NumInGroup)
            .with_description("Count of party identification entries that follow."),
        FieldDef::new(448, "PartyID", FieldType::String),
        FieldDef::new(447, "PartyIDSource", FieldType::Char).with_values([
            ("B", "BIC"),
            ("C", "GeneralIdentifier"),
            ("D", "Proprietary"),
            ("G", "MIC"),
        ]),
        FieldDef::new(452, "PartyRole", FieldType::Int).with_values([
            ("1", "ExecutingFirm"),
            ("3", "ClientID"),
            ("4", "ClearingFirm"),
            ("11", "OrderOriginationTrader"),
            ("12", "ExecutingTrader"),
            ("13", "OrderOriginationFirm"),
            ("16", "ExecutingSystem"),
            ("17", "ContraFirm"),
            ("22", "Exchange"),
            ("36", "Trader"),
        ]),
        FieldDef::new(802, "NoPartySubIDs", FieldType::NumInGroup),
        FieldDef::new(523, "PartySubID", FieldType::String),
        FieldDef::new(803, "PartySubIDType", FieldType::Int),
        // Quote Request fields
        FieldDef::new(146, "NoRelatedSym", FieldType::NumInGroup)
            .with_description("Count of instruments in a quote or market data request."),
        FieldDef::new(303, "QuoteRequestType", FieldType::Int)
            .with_values([("1", "Manual"), ("2", "Automatic")]),
        FieldDef::new(537, "QuoteType", FieldType::Int).with_values([
            ("0", "Indicative"),
            ("1", "Tradeable"),
            ("2", "RestrictedTradeable"),
            ("3", "Counter"),
        ]),
        FieldDef::new(301, "QuoteResponseLevel", FieldType::Int).with_values([
            ("0", "NoAcknowledgement"),
            ("1", "AckNegativeOnly"),
            ("2", "AckEach"),
        ]),
        // Market Data fields
        FieldDef::new(262, "MDReqID", FieldType::String),
        FieldDef::new(263, "SubscriptionRequestType", FieldType::Char).with_values([
            ("0", "Snapshot"),
            ("1", "SnapshotPlusUpdates"),
            ("2", "DisablePreviousSnapshot"),
        ]),
        FieldDef::new(264, "MarketDepth", FieldType::Int),
        FieldDef::new(265, "MDUpdateType", FieldType::Int)
            .with_values([("0", "FullRefresh"), ("1", "IncrementalRefresh")]),
        FieldDef::new(266, "AggregatedBook", FieldType::Boolean)
            .with_values([("Y", "Yes"), ("N", "No")]),
        FieldDef::new(267, "NoMDEntryTypes", FieldType::NumInGroup),
        FieldDef::new(268, "NoMDEntries", FieldType::NumInGroup)
            .with_description("Count of market data entries in the message."),
        FieldDef::new(269, "MDEntryType", FieldType::Char).with_values([
            ("0", "Bid"),
            ("1", "Offer"),
            ("2", "Trade"),
            ("4", "OpeningPrice"),
            ("5", "ClosingPrice"),
            ("6", "SettlementPrice"),
            ("7", "TradingSessionHighPrice"),
            ("8", "TradingSessionLowPrice"),
        ]),
        FieldDef::new(270, "MDEntryPx", FieldType::Price)
            .with_description("Price for this market data entry."),
        FieldDef::new(271, "MDEntrySize", FieldType::Qty)
            .with_description("Quantity available at this price level."),
        FieldDef::new(272, "MDEntryDate", FieldType::UtcDateOnly),
        FieldDef::new(273, "MDEntryTime", FieldType::UtcTimeOnly),
        FieldDef::new(274, "TickDirection", FieldType::Char).with_values([
            ("0", "PlusTick"),
            ("1", "ZeroPlusTick"),
            ("2", "MinusTick"),
            ("3", "ZeroMinusTick"),
        ]),
        FieldDef::new(275, "MDMkt", FieldType::Exchange),
        FieldDef::new(276, "QuoteCondition", FieldType::MultipleStringValue).with_values([
            ("A", "Open/Active"),
            ("B", "Closed/Inactive"),
            ("C", "ExchangeBest"),
        ]),
        FieldDef::new(277, "TradeCondition", FieldType::MultipleStringValue),
        FieldDef::new(278, "MDEntryID", FieldType::String),
        FieldDef::new(279, "MDUpdateAction", FieldType::Char).with_values([
            ("0", "New"),
            ("1", "Change"),
            ("2", "Delete"),
        ]),
        FieldDef::new(280, "MDEntryRefID", FieldType::String),
        FieldDef::new(282, "MDEntryOriginator", FieldType::String)
            .with_description("Source of this market data entry (e.g., liquidity provider)."),
        FieldDef::new(283, "LocationID", FieldType::String),
        FieldDef::new(284, "DeskID", FieldType::String),
        FieldDef::new(286, "OpenCloseSettlFlag", FieldType::MultipleStringValue),
        FieldDef::new(290, "MDEntryPositionNo", FieldType::Int)
            .with_description("Position in the book (1 = best)."),
        FieldDef::new(110, "MinQty", FieldType::Qty),
        // Security reference fields
        FieldDef::new(167, "SecurityType", FieldType::String).with_values([
            ("FXSPOT", "FX Spot"),
            ("FXFWD", "FX Forward"),
            ("FXSWAP", "FX Swap"),
            ("FXNDF", "FX Non-Deliverable Forward"),
            ("FUT", "Future"),
            ("OPT", "Option"),
        ]),
        FieldDef::new(200, "MaturityMonthYear", FieldType::MonthYear)
            .with_description("Month and year of contract expiry, format YYYYMM."),
        FieldDef::new(205, "MaturityDay", FieldType::DayOfMonth),
        FieldDef::new(541, "MaturityDate", FieldType::LocalMktDate)
            .with_description("Expiry date for options or fixing date for NDF."),
        FieldDef::new(201, "PutOrCall", FieldType::Int).with_values([("0", "Put"), ("1", "Call")]),
        FieldDef::new(202, "StrikePrice", FieldType::Price)
            .with_description("Exchange rate at which the option can be exercised."),
        FieldDef::new(206, "OptAttribute", FieldType::Char),
        FieldDef::new(207, "SecurityExchange", FieldType::Exchange),
        FieldDef::new(231, "ContractMultiplier", FieldType::Float),
        // Legs
        FieldDef::new(555, "NoLegs", FieldType::NumInGroup)
            .with_description("Count of legs for multi-leg instruments such as swaps."),
        FieldDef::new(600, "LegSymbol", FieldType::String),
        FieldDef::new(602, "LegSecurityID", FieldType::String),
        FieldDef::new(603, "LegSecurityIDSource", FieldType::String),
        FieldDef::new(608, "LegCFICode", FieldType::String),
        FieldDef::new(609, "LegSecurityType", FieldType::String),
        FieldDef::new(610, "LegMaturityMonthYear", FieldType::MonthYear),
        FieldDef::new(611, "LegMaturityDate", FieldType::LocalMktDate),
        FieldDef::new(612, "LegStrikePrice", FieldType::Price),
        FieldDef::new(616, "LegSecurityExchange", FieldType::Exchange),
        FieldDef::new(617, "LegIssuer", FieldType::String),
        FieldDef::new(618, "LegSecurityDesc", FieldType::String),
        FieldDef::new(619, "LegRatioQty", FieldType::Qty),
        FieldDef::new(620, "LegSide", FieldType::Char),
        FieldDef::new(623, "LegDatedDate", FieldType::LocalMktDate),
        FieldDef::new(624, "LegContractSettlMonth", FieldType::MonthYear),
        FieldDef::new(556, "LegCurrency", FieldType::Currency),
        FieldDef::new(564, "LegPositionEffect", FieldType::Char),
        FieldDef::new(566, "LegPrice", FieldType::Price),
        FieldDef::new(587, "LegSettlType", FieldType::Char),
        FieldDef::new(588, "LegSettlDate", FieldType::LocalMktDate),
        FieldDef::new(637, "LegLastPx", FieldType::Price),
        FieldDef::new(654, "LegRefID", FieldType::String),
        FieldDef::new(684, "LegOfferPx", FieldType::Price),
        FieldDef::new(686, "LegPriceType", FieldType::Int),
        FieldDef::new(687, "LegQty", FieldType::Qty),
        // Allocations
        FieldDef::new(78, "NoAllocs", FieldType::NumInGroup),
        FieldDef::new(79, "AllocAccount", FieldType::String),
        FieldDef::new(661, "AllocAcctIDSource", FieldType::Int),
        FieldDef::new(573, "MatchStatus", FieldType::Char),
        FieldDef::new(366, "AllocPrice", FieldType::Price),
        FieldDef::new(80, "AllocQty", FieldType::Qty),
        FieldDef::new(467, "IndividualAllocID", FieldType::String),
        FieldDef::new(81, "ProcessCode", FieldType::Char),
        FieldDef::new(736, "AllocSettlCurrency", FieldType::Currency),
        FieldDef::new(737, "AllocSettlCurrAmt", FieldType::Amt),
        FieldDef::new(161, "AllocText", FieldType::String),
        // Orders in a list
        FieldDef::new(73, "NoOrders", FieldType::NumInGroup),
        FieldDef::new(526, "SecondaryClOrdID", FieldType::String),
        FieldDef::new(67, "ListSeqNo", FieldType::Int),
        FieldDef::new(583, "ClOrdLinkID", FieldType::String),
        FieldDef::new(160, "SettlInstMode", FieldType::Char),
        FieldDef::new(198, "SecondaryOrderID", FieldType::String),
        // Trading sessions
        FieldDef::new(336, "TradingSessionID", FieldType::String),
        FieldDef::new(625, "TradingSessionSubID", FieldType::String),
        // Capacity and liquidity
        FieldDef::new(423, "PriceType", FieldType::Int).with_values([
            ("1", "Percentage"),
            ("2", "PerUnit"),
            ("3", "FixedAmount"),
            ("6", "Spread"),
        ]),
        FieldDef::new(528, "OrderCapacity", FieldType::Char).with_values([
            ("A", "Agency"),
            ("G", "Proprietary"),
            ("I", "Individual"),
            ("P", "Principal"),
            ("R", "RisklessPrincipal"),
        ]),
        FieldDef::new(851, "LastLiquidityInd", FieldType::Int).with_values([
            ("1", "AddedLiquidity"),
            ("2", "RemovedLiquidity"),
            ("3", "LiquidityRoutedOut"),
        ]),
        // Regulatory timestamps
        FieldDef::new(768, "NoTrdRegTimestamps", FieldType::NumInGroup),
        FieldDef::new(769, "TrdRegTimestamp", FieldType::UtcTimestamp),
        FieldDef::new(770, "TrdRegTimestampType", FieldType::Int)
            .with_values([("2", "Time In"), ("3", "Time Out")]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_fields_unique_tags() {
        let fields = base_fields();
        let mut tags: Vec<u32> = fields.iter().map(|d| d.tag).collect();
        let total = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), total, "duplicate tag in base table");
    }

    #[test]
    fn test_base_fields_cover_structural_tags() {
        let fields = base_fields();
        for tag in [8, 9, 10, 35, 49, 56] {
            assert!(fields.iter().any(|d| d.tag == tag), "missing tag {tag}");
        }
    }

    #[test]
    fn test_side_enum_resolves_buy() {
        let fields = base_fields();
        let side = fields.iter().find(|d| d.tag == 54).unwrap();
        assert_eq!(side.value_description("1"), Some("Buy"));
        assert_eq!(side.value_description("2"), Some("Sell"));
    }
}
