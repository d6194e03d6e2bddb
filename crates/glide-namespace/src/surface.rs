//! The client surface every native module variant must export.

/// Version of [`EXPECTED_SYMBOLS`]. Bumped whenever the list changes.
pub const SURFACE_VERSION: u32 = 1;

/// Names re-exported from the native module, in publication order.
pub const EXPECTED_SYMBOLS: &[&str] = &[
    "AggregationType",
    "BaseScanOptions",
    "ScanOptions",
    "HScanOptions",
    "ZScanOptions",
    "BitEncoding",
    "BitFieldGet",
    "BitFieldIncrBy",
    "BitFieldOffset",
    "BitFieldOverflow",
    "BitFieldSet",
    "BitFieldSubCommands",
    "BitOffset",
    "BitOffsetMultiplier",
    "BitOffsetOptions",
    "BitOverflowControl",
    "BitmapIndexType",
    "BitwiseOperation",
    "ConditionalChange",
    "Decoder",
    "DecoderOption",
    "GeoAddOptions",
    "GlideFt",
    "Field",
    "TextField",
    "TagField",
    "NumericField",
    "VectorField",
    "VectorFieldAttributesFlat",
    "VectorFieldAttributesHnsw",
    "FtCreateOptions",
    "FtSearchOptions",
    "FtInfoReturnType",
    "FtAggregateOptions",
    "FtAggregateLimit",
    "FtAggregateFilter",
    "FtAggregateGroupBy",
    "FtAggregateReducer",
    "FtAggregateSortBy",
    "FtAggregateSortProperty",
    "FtAggregateApply",
    "FtAggregateReturnType",
    "FtSearchReturnType",
    "GlideRecord",
    "GlideJson",
    "GlideString",
    "JsonGetOptions",
    "JsonArrPopOptions",
    "SortedSetDataType",
    "StreamEntryDataType",
    "HashDataType",
    "CoordOrigin",
    "MemberOrigin",
    "SearchOrigin",
    "GeoBoxShape",
    "GeoCircleShape",
    "GeoSearchShape",
    "GeoSearchResultOptions",
    "GeoSearchStoreResultOptions",
    "SortOrder",
    "GeoUnit",
    "GeospatialData",
    "GlideClient",
    "GlideClusterClient",
    "GlideClientConfiguration",
    "AdvancedGlideClientConfiguration",
    "AdvancedGlideClusterClientConfiguration",
    "FunctionListOptions",
    "FunctionListResponse",
    "FunctionStatsSingleResponse",
    "FunctionStatsFullResponse",
    "FunctionRestorePolicy",
    "SlotIdTypes",
    "SlotKeyTypes",
    "StreamEntries",
    "TimeUnit",
    "ReturnTypeXinfoStream",
    "RouteByAddress",
    "RouteOption",
    "Routes",
    "RestoreOptions",
    "SingleNodeRoute",
    "PeriodicChecksManualInterval",
    "PeriodicChecks",
    "Logger",
    "LolwutOptions",
    "Limit",
    "LPosOptions",
    "ListDirection",
    "ExpireOptions",
    "FlushMode",
    "InfoOptions",
    "InsertPosition",
    "SetOptions",
    "ZAddOptions",
    "InfBoundary",
    "KeyWeight",
    "Boundary",
    "ProtocolVersion",
    "RangeByIndex",
    "RangeByScore",
    "RangeByLex",
    "ReadFrom",
    "ServerCredentials",
    "SortOptions",
    "StreamGroupOptions",
    "StreamTrimOptions",
    "StreamAddOptions",
    "StreamClaimOptions",
    "StreamReadGroupOptions",
    "StreamReadOptions",
    "StreamPendingOptions",
    "ClosingError",
    "ConfigurationError",
    "ExecAbortError",
    "ValkeyError",
    "GlideReturnType",
    "RequestError",
    "TimeoutError",
    "ConnectionError",
    "ClusterTransaction",
    "Transaction",
    "PubSubMsg",
    "ScoreFilter",
    "SignedEncoding",
    "UnsignedEncoding",
    "UpdateByScore",
    "createLeakedArray",
    "createLeakedAttribute",
    "createLeakedBigint",
    "createLeakedDouble",
    "createLeakedMap",
    "createLeakedString",
    "Script",
    "ObjectType",
    "ClusterScanCursor",
    "BaseClientConfiguration",
    "GlideClusterClientConfiguration",
    "LevelOptions",
    "ReturnTypeRecord",
    "ReturnTypeMap",
    "ClusterResponse",
    "ReturnTypeAttribute",
    "ReturnTypeJson",
    "UniversalReturnTypeJson",
];

/// A versioned set of names a published namespace commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedSymbolSet {
    version: u32,
    names:   &'static [&'static str],
}

impl ExpectedSymbolSet {
    pub const fn new(version: u32, names: &'static [&'static str]) -> Self { Self { version, names } }

    /// The client surface of this release.
    pub const fn current() -> Self { Self::new(SURFACE_VERSION, EXPECTED_SYMBOLS) }

    pub fn version(&self) -> u32 { self.version }

    pub fn names(&self) -> &'static [&'static str] { self.names }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn contains(&self, name: &str) -> bool { self.names.iter().any(|n| *n == name) }
}

impl Default for ExpectedSymbolSet {
    fn default() -> Self { Self::current() }
}
