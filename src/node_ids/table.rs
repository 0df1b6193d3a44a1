// Generated from the OPC UA namespace-zero NodeIds.csv. Do not edit by hand.

standard_node_ids! {
    Boolean = 1,
    SByte = 2,
    Byte = 3,
    Int16 = 4,
    UInt16 = 5,
    Int32 = 6,
    UInt32 = 7,
    Int64 = 8,
    UInt64 = 9,
    Float = 10,
    Double = 11,
    String = 12,
    DateTime = 13,
    Guid = 14,
    ByteString = 15,
    XmlElement = 16,
    NodeId = 17,
    ExpandedNodeId = 18,
    StatusCode = 19,
    QualifiedName = 20,
    LocalizedText = 21,
    Structure = 22,
    DataValue = 23,
    BaseDataType = 24,
    DiagnosticInfo = 25,
    Number = 26,
    Integer = 27,
    UInteger = 28,
    Enumeration = 29,
    Image = 30,
    References = 31,
    NonHierarchicalReferences = 32,
    HierarchicalReferences = 33,
    HasChild = 34,
    Organizes = 35,
    HasEventSource = 36,
    HasModellingRule = 37,
    HasEncoding = 38,
    HasDescription = 39,
    HasTypeDefinition = 40,
    GeneratesEvent = 41,
    Aggregates = 44,
    HasSubtype = 45,
    HasProperty = 46,
    HasComponent = 47,
    HasNotifier = 48,
    HasOrderedComponent = 49,
    Decimal = 50,
    FromState = 51,
    ToState = 52,
    HasCause = 53,
    HasEffect = 54,
    HasHistoricalConfiguration = 56,
    BaseObjectType = 58,
    FolderType = 61,
    BaseVariableType = 62,
    BaseDataVariableType = 63,
    PropertyType = 68,
    DataTypeDescriptionType = 69,
    DataTypeDictionaryType = 72,
    DataTypeSystemType = 75,
    DataTypeEncodingType = 76,
    ModellingRuleType = 77,
    ModellingRule_Mandatory = 78,
    ModellingRule_Optional = 80,
    ModellingRule_ExposesItsArray = 83,
    RootFolder = 84,
    ObjectsFolder = 85,
    TypesFolder = 86,
    ViewsFolder = 87,
    ObjectTypesFolder = 88,
    VariableTypesFolder = 89,
    DataTypesFolder = 90,
    ReferenceTypesFolder = 91,
    XmlSchema_TypeSystem = 92,
    OPCBinarySchema_TypeSystem = 93,
    PermissionType = 94,
    AccessRestrictionType = 95,
    RolePermissionType = 96,
    DataTypeDefinition = 97,
    StructureType = 98,
    StructureDefinition = 99,
    EnumDefinition = 100,
    StructureField = 101,
    EnumField = 102,
    DataTypeDescriptionType_DataTypeVersion = 104,
    DataTypeDescriptionType_DictionaryFragment = 105,
    DataTypeDictionaryType_DataTypeVersion = 106,
    DataTypeDictionaryType_NamespaceUri = 107,
    ModellingRuleType_NamingRule = 111,
    ModellingRule_Mandatory_NamingRule = 112,
    ModellingRule_Optional_NamingRule = 113,
    ModellingRule_ExposesItsArray_NamingRule = 114,
    HasSubStateMachine = 117,
    NamingRuleType = 120,
    DataTypeDefinition_Encoding_DefaultBinary = 121,
    StructureDefinition_Encoding_DefaultBinary = 122,
    EnumDefinition_Encoding_DefaultBinary = 123,
    DataSetMetaDataType_Encoding_DefaultBinary = 124,
    DataTypeDescription_Encoding_DefaultBinary = 125,
    StructureDescription_Encoding_DefaultBinary = 126,
    EnumDescription_Encoding_DefaultBinary = 127,
    RolePermissionType_Encoding_DefaultBinary = 128,
    HasArgumentDescription = 129,
    HasOptionalInputArgumentDescription = 131,
    IdType = 256,
    NodeClass = 257,
    Node = 258,
    Node_Encoding_DefaultXml = 259,
    Node_Encoding_DefaultBinary = 260,
    ObjectNode = 261,
    ObjectNode_Encoding_DefaultXml = 262,
    ObjectNode_Encoding_DefaultBinary = 263,
    ObjectTypeNode = 264,
    ObjectTypeNode_Encoding_DefaultXml = 265,
    ObjectTypeNode_Encoding_DefaultBinary = 266,
    VariableNode = 267,
    VariableNode_Encoding_DefaultXml = 268,
    VariableNode_Encoding_DefaultBinary = 269,
    VariableTypeNode = 270,
    VariableTypeNode_Encoding_DefaultXml = 271,
    VariableTypeNode_Encoding_DefaultBinary = 272,
    ReferenceTypeNode = 273,
    ReferenceTypeNode_Encoding_DefaultXml = 274,
    ReferenceTypeNode_Encoding_DefaultBinary = 275,
    MethodNode = 276,
    MethodNode_Encoding_DefaultXml = 277,
    MethodNode_Encoding_DefaultBinary = 278,
    ViewNode = 279,
    ViewNode_Encoding_DefaultXml = 280,
    ViewNode_Encoding_DefaultBinary = 281,
    DataTypeNode = 282,
    DataTypeNode_Encoding_DefaultXml = 283,
    DataTypeNode_Encoding_DefaultBinary = 284,
    ReferenceNode = 285,
    ReferenceNode_Encoding_DefaultXml = 286,
    ReferenceNode_Encoding_DefaultBinary = 287,
    IntegerId = 288,
    Counter = 289,
    Duration = 290,
    NumericRange = 291,
    Time = 292,
    Date = 293,
    UtcTime = 294,
    LocaleId = 295,
    Argument = 296,
    Argument_Encoding_DefaultXml = 297,
    Argument_Encoding_DefaultBinary = 298,
    StatusResult = 299,
    StatusResult_Encoding_DefaultXml = 300,
    StatusResult_Encoding_DefaultBinary = 301,
    MessageSecurityMode = 302,
    UserTokenType = 303,
    UserTokenPolicy = 304,
    UserTokenPolicy_Encoding_DefaultXml = 305,
    UserTokenPolicy_Encoding_DefaultBinary = 306,
    ApplicationType = 307,
    ApplicationDescription = 308,
    ApplicationDescription_Encoding_DefaultXml = 309,
    ApplicationDescription_Encoding_DefaultBinary = 310,
    ApplicationInstanceCertificate = 311,
    EndpointDescription = 312,
    EndpointDescription_Encoding_DefaultXml = 313,
    EndpointDescription_Encoding_DefaultBinary = 314,
    SecurityTokenRequestType = 315,
    UserIdentityToken = 316,
    UserIdentityToken_Encoding_DefaultXml = 317,
    UserIdentityToken_Encoding_DefaultBinary = 318,
    AnonymousIdentityToken = 319,
    AnonymousIdentityToken_Encoding_DefaultXml = 320,
    AnonymousIdentityToken_Encoding_DefaultBinary = 321,
    UserNameIdentityToken = 322,
    UserNameIdentityToken_Encoding_DefaultXml = 323,
    UserNameIdentityToken_Encoding_DefaultBinary = 324,
    X509IdentityToken = 325,
    X509IdentityToken_Encoding_DefaultXml = 326,
    X509IdentityToken_Encoding_DefaultBinary = 327,
    EndpointConfiguration = 331,
    EndpointConfiguration_Encoding_DefaultXml = 332,
    EndpointConfiguration_Encoding_DefaultBinary = 333,
    BuildInfo = 338,
    BuildInfo_Encoding_DefaultXml = 339,
    BuildInfo_Encoding_DefaultBinary = 340,
    SignedSoftwareCertificate = 344,
    SignedSoftwareCertificate_Encoding_DefaultXml = 345,
    SignedSoftwareCertificate_Encoding_DefaultBinary = 346,
    AttributeWriteMask = 347,
    NodeAttributesMask = 348,
    NodeAttributes = 349,
    NodeAttributes_Encoding_DefaultXml = 350,
    NodeAttributes_Encoding_DefaultBinary = 351,
    ObjectAttributes = 352,
    ObjectAttributes_Encoding_DefaultXml = 353,
    ObjectAttributes_Encoding_DefaultBinary = 354,
    VariableAttributes = 355,
    VariableAttributes_Encoding_DefaultXml = 356,
    VariableAttributes_Encoding_DefaultBinary = 357,
    MethodAttributes = 358,
    MethodAttributes_Encoding_DefaultXml = 359,
    MethodAttributes_Encoding_DefaultBinary = 360,
    ObjectTypeAttributes = 361,
    ObjectTypeAttributes_Encoding_DefaultXml = 362,
    ObjectTypeAttributes_Encoding_DefaultBinary = 363,
    VariableTypeAttributes = 364,
    VariableTypeAttributes_Encoding_DefaultXml = 365,
    VariableTypeAttributes_Encoding_DefaultBinary = 366,
    ReferenceTypeAttributes = 367,
    ReferenceTypeAttributes_Encoding_DefaultXml = 368,
    ReferenceTypeAttributes_Encoding_DefaultBinary = 369,
    DataTypeAttributes = 370,
    DataTypeAttributes_Encoding_DefaultXml = 371,
    DataTypeAttributes_Encoding_DefaultBinary = 372,
    ViewAttributes = 373,
    ViewAttributes_Encoding_DefaultXml = 374,
    ViewAttributes_Encoding_DefaultBinary = 375,
    AddNodesItem = 376,
    AddNodesItem_Encoding_DefaultXml = 377,
    AddNodesItem_Encoding_DefaultBinary = 378,
    AddReferencesItem = 379,
    AddReferencesItem_Encoding_DefaultXml = 380,
    AddReferencesItem_Encoding_DefaultBinary = 381,
    DeleteNodesItem = 382,
    DeleteNodesItem_Encoding_DefaultXml = 383,
    DeleteNodesItem_Encoding_DefaultBinary = 384,
    DeleteReferencesItem = 385,
    DeleteReferencesItem_Encoding_DefaultXml = 386,
    DeleteReferencesItem_Encoding_DefaultBinary = 387,
    SessionAuthenticationToken = 388,
    RequestHeader = 389,
    RequestHeader_Encoding_DefaultXml = 390,
    RequestHeader_Encoding_DefaultBinary = 391,
    ResponseHeader = 392,
    ResponseHeader_Encoding_DefaultXml = 393,
    ResponseHeader_Encoding_DefaultBinary = 394,
    ServiceFault = 395,
    ServiceFault_Encoding_DefaultXml = 396,
    ServiceFault_Encoding_DefaultBinary = 397,
    FindServersRequest = 420,
    FindServersRequest_Encoding_DefaultXml = 421,
    FindServersRequest_Encoding_DefaultBinary = 422,
    FindServersResponse = 423,
    FindServersResponse_Encoding_DefaultXml = 424,
    FindServersResponse_Encoding_DefaultBinary = 425,
    GetEndpointsRequest = 426,
    GetEndpointsRequest_Encoding_DefaultXml = 427,
    GetEndpointsRequest_Encoding_DefaultBinary = 428,
    GetEndpointsResponse = 429,
    GetEndpointsResponse_Encoding_DefaultXml = 430,
    GetEndpointsResponse_Encoding_DefaultBinary = 431,
    RegisteredServer = 432,
    RegisteredServer_Encoding_DefaultXml = 433,
    RegisteredServer_Encoding_DefaultBinary = 434,
    RegisterServerRequest = 435,
    RegisterServerRequest_Encoding_DefaultXml = 436,
    RegisterServerRequest_Encoding_DefaultBinary = 437,
    RegisterServerResponse = 438,
    RegisterServerResponse_Encoding_DefaultXml = 439,
    RegisterServerResponse_Encoding_DefaultBinary = 440,
    ChannelSecurityToken = 441,
    ChannelSecurityToken_Encoding_DefaultXml = 442,
    ChannelSecurityToken_Encoding_DefaultBinary = 443,
    OpenSecureChannelRequest = 444,
    OpenSecureChannelRequest_Encoding_DefaultXml = 445,
    OpenSecureChannelRequest_Encoding_DefaultBinary = 446,
    OpenSecureChannelResponse = 447,
    OpenSecureChannelResponse_Encoding_DefaultXml = 448,
    OpenSecureChannelResponse_Encoding_DefaultBinary = 449,
    CloseSecureChannelRequest = 450,
    CloseSecureChannelRequest_Encoding_DefaultXml = 451,
    CloseSecureChannelRequest_Encoding_DefaultBinary = 452,
    CloseSecureChannelResponse = 453,
    CloseSecureChannelResponse_Encoding_DefaultXml = 454,
    CloseSecureChannelResponse_Encoding_DefaultBinary = 455,
    SignatureData = 456,
    SignatureData_Encoding_DefaultXml = 457,
    SignatureData_Encoding_DefaultBinary = 458,
    CreateSessionRequest = 459,
    CreateSessionRequest_Encoding_DefaultXml = 460,
    CreateSessionRequest_Encoding_DefaultBinary = 461,
    CreateSessionResponse = 462,
    CreateSessionResponse_Encoding_DefaultXml = 463,
    CreateSessionResponse_Encoding_DefaultBinary = 464,
    ActivateSessionRequest = 465,
    ActivateSessionRequest_Encoding_DefaultXml = 466,
    ActivateSessionRequest_Encoding_DefaultBinary = 467,
    ActivateSessionResponse = 468,
    ActivateSessionResponse_Encoding_DefaultXml = 469,
    ActivateSessionResponse_Encoding_DefaultBinary = 470,
    CloseSessionRequest = 471,
    CloseSessionRequest_Encoding_DefaultXml = 472,
    CloseSessionRequest_Encoding_DefaultBinary = 473,
    CloseSessionResponse = 474,
    CloseSessionResponse_Encoding_DefaultXml = 475,
    CloseSessionResponse_Encoding_DefaultBinary = 476,
    CancelRequest = 477,
    CancelRequest_Encoding_DefaultXml = 478,
    CancelRequest_Encoding_DefaultBinary = 479,
    CancelResponse = 480,
    CancelResponse_Encoding_DefaultXml = 481,
    CancelResponse_Encoding_DefaultBinary = 482,
    AddNodesResult = 483,
    AddNodesResult_Encoding_DefaultXml = 484,
    AddNodesResult_Encoding_DefaultBinary = 485,
    AddNodesRequest = 486,
    AddNodesRequest_Encoding_DefaultXml = 487,
    AddNodesRequest_Encoding_DefaultBinary = 488,
    AddNodesResponse = 489,
    AddNodesResponse_Encoding_DefaultXml = 490,
    AddNodesResponse_Encoding_DefaultBinary = 491,
    AddReferencesRequest = 492,
    AddReferencesRequest_Encoding_DefaultXml = 493,
    AddReferencesRequest_Encoding_DefaultBinary = 494,
    AddReferencesResponse = 495,
    AddReferencesResponse_Encoding_DefaultXml = 496,
    AddReferencesResponse_Encoding_DefaultBinary = 497,
    DeleteNodesRequest = 498,
    DeleteNodesRequest_Encoding_DefaultXml = 499,
    DeleteNodesRequest_Encoding_DefaultBinary = 500,
    DeleteNodesResponse = 501,
    DeleteNodesResponse_Encoding_DefaultXml = 502,
    DeleteNodesResponse_Encoding_DefaultBinary = 503,
    DeleteReferencesRequest = 504,
    DeleteReferencesRequest_Encoding_DefaultXml = 505,
    DeleteReferencesRequest_Encoding_DefaultBinary = 506,
    DeleteReferencesResponse = 507,
    DeleteReferencesResponse_Encoding_DefaultXml = 508,
    DeleteReferencesResponse_Encoding_DefaultBinary = 509,
    BrowseDirection = 510,
    ViewDescription = 511,
    ViewDescription_Encoding_DefaultXml = 512,
    ViewDescription_Encoding_DefaultBinary = 513,
    BrowseDescription = 514,
    BrowseDescription_Encoding_DefaultXml = 515,
    BrowseDescription_Encoding_DefaultBinary = 516,
    BrowseResultMask = 517,
    ReferenceDescription = 518,
    ReferenceDescription_Encoding_DefaultXml = 519,
    ReferenceDescription_Encoding_DefaultBinary = 520,
    ContinuationPoint = 521,
    BrowseResult = 522,
    BrowseResult_Encoding_DefaultXml = 523,
    BrowseResult_Encoding_DefaultBinary = 524,
    BrowseRequest = 525,
    BrowseRequest_Encoding_DefaultXml = 526,
    BrowseRequest_Encoding_DefaultBinary = 527,
    BrowseResponse = 528,
    BrowseResponse_Encoding_DefaultXml = 529,
    BrowseResponse_Encoding_DefaultBinary = 530,
    BrowseNextRequest = 531,
    BrowseNextRequest_Encoding_DefaultXml = 532,
    BrowseNextRequest_Encoding_DefaultBinary = 533,
    BrowseNextResponse = 534,
    BrowseNextResponse_Encoding_DefaultXml = 535,
    BrowseNextResponse_Encoding_DefaultBinary = 536,
    RelativePathElement = 537,
    RelativePathElement_Encoding_DefaultXml = 538,
    RelativePathElement_Encoding_DefaultBinary = 539,
    RelativePath = 540,
    RelativePath_Encoding_DefaultXml = 541,
    RelativePath_Encoding_DefaultBinary = 542,
    BrowsePath = 543,
    BrowsePath_Encoding_DefaultXml = 544,
    BrowsePath_Encoding_DefaultBinary = 545,
    BrowsePathTarget = 546,
    BrowsePathTarget_Encoding_DefaultXml = 547,
    BrowsePathTarget_Encoding_DefaultBinary = 548,
    BrowsePathResult = 549,
    BrowsePathResult_Encoding_DefaultXml = 550,
    BrowsePathResult_Encoding_DefaultBinary = 551,
    TranslateBrowsePathsToNodeIdsRequest = 552,
    TranslateBrowsePathsToNodeIdsRequest_Encoding_DefaultXml = 553,
    TranslateBrowsePathsToNodeIdsRequest_Encoding_DefaultBinary = 554,
    TranslateBrowsePathsToNodeIdsResponse = 555,
    TranslateBrowsePathsToNodeIdsResponse_Encoding_DefaultXml = 556,
    TranslateBrowsePathsToNodeIdsResponse_Encoding_DefaultBinary = 557,
    RegisterNodesRequest = 558,
    RegisterNodesRequest_Encoding_DefaultXml = 559,
    RegisterNodesRequest_Encoding_DefaultBinary = 560,
    RegisterNodesResponse = 561,
    RegisterNodesResponse_Encoding_DefaultXml = 562,
    RegisterNodesResponse_Encoding_DefaultBinary = 563,
    UnregisterNodesRequest = 564,
    UnregisterNodesRequest_Encoding_DefaultXml = 565,
    UnregisterNodesRequest_Encoding_DefaultBinary = 566,
    UnregisterNodesResponse = 567,
    UnregisterNodesResponse_Encoding_DefaultXml = 568,
    UnregisterNodesResponse_Encoding_DefaultBinary = 569,
    QueryDataDescription = 570,
    QueryDataDescription_Encoding_DefaultXml = 571,
    QueryDataDescription_Encoding_DefaultBinary = 572,
    NodeTypeDescription = 573,
    NodeTypeDescription_Encoding_DefaultXml = 574,
    NodeTypeDescription_Encoding_DefaultBinary = 575,
    FilterOperator = 576,
    QueryDataSet = 577,
    QueryDataSet_Encoding_DefaultXml = 578,
    QueryDataSet_Encoding_DefaultBinary = 579,
    NodeReference = 580,
    NodeReference_Encoding_DefaultXml = 581,
    NodeReference_Encoding_DefaultBinary = 582,
    ContentFilterElement = 583,
    ContentFilterElement_Encoding_DefaultXml = 584,
    ContentFilterElement_Encoding_DefaultBinary = 585,
    ContentFilter = 586,
    ContentFilter_Encoding_DefaultXml = 587,
    ContentFilter_Encoding_DefaultBinary = 588,
    FilterOperand = 589,
    FilterOperand_Encoding_DefaultXml = 590,
    FilterOperand_Encoding_DefaultBinary = 591,
    ElementOperand = 592,
    ElementOperand_Encoding_DefaultXml = 593,
    ElementOperand_Encoding_DefaultBinary = 594,
    LiteralOperand = 595,
    LiteralOperand_Encoding_DefaultXml = 596,
    LiteralOperand_Encoding_DefaultBinary = 597,
    AttributeOperand = 598,
    AttributeOperand_Encoding_DefaultXml = 599,
    AttributeOperand_Encoding_DefaultBinary = 600,
    SimpleAttributeOperand = 601,
    SimpleAttributeOperand_Encoding_DefaultXml = 602,
    SimpleAttributeOperand_Encoding_DefaultBinary = 603,
    ContentFilterElementResult = 604,
    ContentFilterElementResult_Encoding_DefaultXml = 605,
    ContentFilterElementResult_Encoding_DefaultBinary = 606,
    ContentFilterResult = 607,
    ContentFilterResult_Encoding_DefaultXml = 608,
    ContentFilterResult_Encoding_DefaultBinary = 609,
    ParsingResult = 610,
    ParsingResult_Encoding_DefaultXml = 611,
    ParsingResult_Encoding_DefaultBinary = 612,
    QueryFirstRequest = 613,
    QueryFirstRequest_Encoding_DefaultXml = 614,
    QueryFirstRequest_Encoding_DefaultBinary = 615,
    QueryFirstResponse = 616,
    QueryFirstResponse_Encoding_DefaultXml = 617,
    QueryFirstResponse_Encoding_DefaultBinary = 618,
    QueryNextRequest = 619,
    QueryNextRequest_Encoding_DefaultXml = 620,
    QueryNextRequest_Encoding_DefaultBinary = 621,
    QueryNextResponse = 622,
    QueryNextResponse_Encoding_DefaultXml = 623,
    QueryNextResponse_Encoding_DefaultBinary = 624,
    TimestampsToReturn = 625,
    ReadValueId = 626,
    ReadValueId_Encoding_DefaultXml = 627,
    ReadValueId_Encoding_DefaultBinary = 628,
    ReadRequest = 629,
    ReadRequest_Encoding_DefaultXml = 630,
    ReadRequest_Encoding_DefaultBinary = 631,
    ReadResponse = 632,
    ReadResponse_Encoding_DefaultXml = 633,
    ReadResponse_Encoding_DefaultBinary = 634,
    HistoryReadValueId = 635,
    HistoryReadValueId_Encoding_DefaultXml = 636,
    HistoryReadValueId_Encoding_DefaultBinary = 637,
    HistoryReadResult = 638,
    HistoryReadResult_Encoding_DefaultXml = 639,
    HistoryReadResult_Encoding_DefaultBinary = 640,
    HistoryReadDetails = 641,
    HistoryReadDetails_Encoding_DefaultXml = 642,
    HistoryReadDetails_Encoding_DefaultBinary = 643,
    ReadEventDetails = 644,
    ReadEventDetails_Encoding_DefaultXml = 645,
    ReadEventDetails_Encoding_DefaultBinary = 646,
    ReadRawModifiedDetails = 647,
    ReadRawModifiedDetails_Encoding_DefaultXml = 648,
    ReadRawModifiedDetails_Encoding_DefaultBinary = 649,
    ReadProcessedDetails = 650,
    ReadProcessedDetails_Encoding_DefaultXml = 651,
    ReadProcessedDetails_Encoding_DefaultBinary = 652,
    ReadAtTimeDetails = 653,
    ReadAtTimeDetails_Encoding_DefaultXml = 654,
    ReadAtTimeDetails_Encoding_DefaultBinary = 655,
    HistoryData = 656,
    HistoryData_Encoding_DefaultXml = 657,
    HistoryData_Encoding_DefaultBinary = 658,
    HistoryEvent = 659,
    HistoryEvent_Encoding_DefaultXml = 660,
    HistoryEvent_Encoding_DefaultBinary = 661,
    HistoryReadRequest = 662,
    HistoryReadRequest_Encoding_DefaultXml = 663,
    HistoryReadRequest_Encoding_DefaultBinary = 664,
    HistoryReadResponse = 665,
    HistoryReadResponse_Encoding_DefaultXml = 666,
    HistoryReadResponse_Encoding_DefaultBinary = 667,
    WriteValue = 668,
    WriteValue_Encoding_DefaultXml = 669,
    WriteValue_Encoding_DefaultBinary = 670,
    WriteRequest = 671,
    WriteRequest_Encoding_DefaultXml = 672,
    WriteRequest_Encoding_DefaultBinary = 673,
    WriteResponse = 674,
    WriteResponse_Encoding_DefaultXml = 675,
    WriteResponse_Encoding_DefaultBinary = 676,
    HistoryUpdateDetails = 677,
    HistoryUpdateDetails_Encoding_DefaultXml = 678,
    HistoryUpdateDetails_Encoding_DefaultBinary = 679,
    UpdateDataDetails = 680,
    UpdateDataDetails_Encoding_DefaultXml = 681,
    UpdateDataDetails_Encoding_DefaultBinary = 682,
    UpdateEventDetails = 683,
    UpdateEventDetails_Encoding_DefaultXml = 684,
    UpdateEventDetails_Encoding_DefaultBinary = 685,
    DeleteRawModifiedDetails = 686,
    DeleteRawModifiedDetails_Encoding_DefaultXml = 687,
    DeleteRawModifiedDetails_Encoding_DefaultBinary = 688,
    DeleteAtTimeDetails = 689,
    DeleteAtTimeDetails_Encoding_DefaultXml = 690,
    DeleteAtTimeDetails_Encoding_DefaultBinary = 691,
    DeleteEventDetails = 692,
    DeleteEventDetails_Encoding_DefaultXml = 693,
    DeleteEventDetails_Encoding_DefaultBinary = 694,
    HistoryUpdateResult = 695,
    HistoryUpdateResult_Encoding_DefaultXml = 696,
    HistoryUpdateResult_Encoding_DefaultBinary = 697,
    HistoryUpdateRequest = 698,
    HistoryUpdateRequest_Encoding_DefaultXml = 699,
    HistoryUpdateRequest_Encoding_DefaultBinary = 700,
    HistoryUpdateResponse = 701,
    HistoryUpdateResponse_Encoding_DefaultXml = 702,
    HistoryUpdateResponse_Encoding_DefaultBinary = 703,
    CallMethodRequest = 704,
    CallMethodRequest_Encoding_DefaultXml = 705,
    CallMethodRequest_Encoding_DefaultBinary = 706,
    CallMethodResult = 707,
    CallMethodResult_Encoding_DefaultXml = 708,
    CallMethodResult_Encoding_DefaultBinary = 709,
    CallRequest = 710,
    CallRequest_Encoding_DefaultXml = 711,
    CallRequest_Encoding_DefaultBinary = 712,
    CallResponse = 713,
    CallResponse_Encoding_DefaultXml = 714,
    CallResponse_Encoding_DefaultBinary = 715,
    MonitoringMode = 716,
    DataChangeTrigger = 717,
    DeadbandType = 718,
    MonitoringFilter = 719,
    MonitoringFilter_Encoding_DefaultXml = 720,
    MonitoringFilter_Encoding_DefaultBinary = 721,
    DataChangeFilter = 722,
    DataChangeFilter_Encoding_DefaultXml = 723,
    DataChangeFilter_Encoding_DefaultBinary = 724,
    EventFilter = 725,
    EventFilter_Encoding_DefaultXml = 726,
    EventFilter_Encoding_DefaultBinary = 727,
    AggregateFilter = 728,
    AggregateFilter_Encoding_DefaultXml = 729,
    AggregateFilter_Encoding_DefaultBinary = 730,
    MonitoringFilterResult = 731,
    MonitoringFilterResult_Encoding_DefaultXml = 732,
    MonitoringFilterResult_Encoding_DefaultBinary = 733,
    EventFilterResult = 734,
    EventFilterResult_Encoding_DefaultXml = 735,
    EventFilterResult_Encoding_DefaultBinary = 736,
    AggregateFilterResult = 737,
    AggregateFilterResult_Encoding_DefaultXml = 738,
    AggregateFilterResult_Encoding_DefaultBinary = 739,
    MonitoringParameters = 740,
    MonitoringParameters_Encoding_DefaultXml = 741,
    MonitoringParameters_Encoding_DefaultBinary = 742,
    MonitoredItemCreateRequest = 743,
    MonitoredItemCreateRequest_Encoding_DefaultXml = 744,
    MonitoredItemCreateRequest_Encoding_DefaultBinary = 745,
    MonitoredItemCreateResult = 746,
    MonitoredItemCreateResult_Encoding_DefaultXml = 747,
    MonitoredItemCreateResult_Encoding_DefaultBinary = 748,
    CreateMonitoredItemsRequest = 749,
    CreateMonitoredItemsRequest_Encoding_DefaultXml = 750,
    CreateMonitoredItemsRequest_Encoding_DefaultBinary = 751,
    CreateMonitoredItemsResponse = 752,
    CreateMonitoredItemsResponse_Encoding_DefaultXml = 753,
    CreateMonitoredItemsResponse_Encoding_DefaultBinary = 754,
    MonitoredItemModifyRequest = 755,
    MonitoredItemModifyRequest_Encoding_DefaultXml = 756,
    MonitoredItemModifyRequest_Encoding_DefaultBinary = 757,
    MonitoredItemModifyResult = 758,
    MonitoredItemModifyResult_Encoding_DefaultXml = 759,
    MonitoredItemModifyResult_Encoding_DefaultBinary = 760,
    ModifyMonitoredItemsRequest = 761,
    ModifyMonitoredItemsRequest_Encoding_DefaultXml = 762,
    ModifyMonitoredItemsRequest_Encoding_DefaultBinary = 763,
    ModifyMonitoredItemsResponse = 764,
    ModifyMonitoredItemsResponse_Encoding_DefaultXml = 765,
    ModifyMonitoredItemsResponse_Encoding_DefaultBinary = 766,
    SetMonitoringModeRequest = 767,
    SetMonitoringModeRequest_Encoding_DefaultXml = 768,
    SetMonitoringModeRequest_Encoding_DefaultBinary = 769,
    SetMonitoringModeResponse = 770,
    SetMonitoringModeResponse_Encoding_DefaultXml = 771,
    SetMonitoringModeResponse_Encoding_DefaultBinary = 772,
    SetTriggeringRequest = 773,
    SetTriggeringRequest_Encoding_DefaultXml = 774,
    SetTriggeringRequest_Encoding_DefaultBinary = 775,
    SetTriggeringResponse = 776,
    SetTriggeringResponse_Encoding_DefaultXml = 777,
    SetTriggeringResponse_Encoding_DefaultBinary = 778,
    DeleteMonitoredItemsRequest = 779,
    DeleteMonitoredItemsRequest_Encoding_DefaultXml = 780,
    DeleteMonitoredItemsRequest_Encoding_DefaultBinary = 781,
    DeleteMonitoredItemsResponse = 782,
    DeleteMonitoredItemsResponse_Encoding_DefaultXml = 783,
    DeleteMonitoredItemsResponse_Encoding_DefaultBinary = 784,
    CreateSubscriptionRequest = 785,
    CreateSubscriptionRequest_Encoding_DefaultXml = 786,
    CreateSubscriptionRequest_Encoding_DefaultBinary = 787,
    CreateSubscriptionResponse = 788,
    CreateSubscriptionResponse_Encoding_DefaultXml = 789,
    CreateSubscriptionResponse_Encoding_DefaultBinary = 790,
    ModifySubscriptionRequest = 791,
    ModifySubscriptionRequest_Encoding_DefaultXml = 792,
    ModifySubscriptionRequest_Encoding_DefaultBinary = 793,
    ModifySubscriptionResponse = 794,
    ModifySubscriptionResponse_Encoding_DefaultXml = 795,
    ModifySubscriptionResponse_Encoding_DefaultBinary = 796,
    SetPublishingModeRequest = 797,
    SetPublishingModeRequest_Encoding_DefaultXml = 798,
    SetPublishingModeRequest_Encoding_DefaultBinary = 799,
    SetPublishingModeResponse = 800,
    SetPublishingModeResponse_Encoding_DefaultXml = 801,
    SetPublishingModeResponse_Encoding_DefaultBinary = 802,
    NotificationMessage = 803,
    NotificationMessage_Encoding_DefaultXml = 804,
    NotificationMessage_Encoding_DefaultBinary = 805,
    MonitoredItemNotification = 806,
    MonitoredItemNotification_Encoding_DefaultXml = 807,
    MonitoredItemNotification_Encoding_DefaultBinary = 808,
    DataChangeNotification = 809,
    DataChangeNotification_Encoding_DefaultXml = 810,
    DataChangeNotification_Encoding_DefaultBinary = 811,
    StatusChangeNotification = 818,
    StatusChangeNotification_Encoding_DefaultXml = 819,
    StatusChangeNotification_Encoding_DefaultBinary = 820,
    SubscriptionAcknowledgement = 821,
    SubscriptionAcknowledgement_Encoding_DefaultXml = 822,
    SubscriptionAcknowledgement_Encoding_DefaultBinary = 823,
    PublishRequest = 824,
    PublishRequest_Encoding_DefaultXml = 825,
    PublishRequest_Encoding_DefaultBinary = 826,
    PublishResponse = 827,
    PublishResponse_Encoding_DefaultXml = 828,
    PublishResponse_Encoding_DefaultBinary = 829,
    RepublishRequest = 830,
    RepublishRequest_Encoding_DefaultXml = 831,
    RepublishRequest_Encoding_DefaultBinary = 832,
    RepublishResponse = 833,
    RepublishResponse_Encoding_DefaultXml = 834,
    RepublishResponse_Encoding_DefaultBinary = 835,
    TransferResult = 836,
    TransferResult_Encoding_DefaultXml = 837,
    TransferResult_Encoding_DefaultBinary = 838,
    TransferSubscriptionsRequest = 839,
    TransferSubscriptionsRequest_Encoding_DefaultXml = 840,
    TransferSubscriptionsRequest_Encoding_DefaultBinary = 841,
    TransferSubscriptionsResponse = 842,
    TransferSubscriptionsResponse_Encoding_DefaultXml = 843,
    TransferSubscriptionsResponse_Encoding_DefaultBinary = 844,
    DeleteSubscriptionsRequest = 845,
    DeleteSubscriptionsRequest_Encoding_DefaultXml = 846,
    DeleteSubscriptionsRequest_Encoding_DefaultBinary = 847,
    DeleteSubscriptionsResponse = 848,
    DeleteSubscriptionsResponse_Encoding_DefaultXml = 849,
    DeleteSubscriptionsResponse_Encoding_DefaultBinary = 850,
    RedundancySupport = 851,
    ServerState = 852,
    RedundantServerDataType = 853,
    RedundantServerDataType_Encoding_DefaultXml = 854,
    RedundantServerDataType_Encoding_DefaultBinary = 855,
    SamplingIntervalDiagnosticsDataType = 856,
    SamplingIntervalDiagnosticsDataType_Encoding_DefaultXml = 857,
    SamplingIntervalDiagnosticsDataType_Encoding_DefaultBinary = 858,
    ServerDiagnosticsSummaryDataType = 859,
    ServerDiagnosticsSummaryDataType_Encoding_DefaultXml = 860,
    ServerDiagnosticsSummaryDataType_Encoding_DefaultBinary = 861,
    ServerStatusDataType = 862,
    ServerStatusDataType_Encoding_DefaultXml = 863,
    ServerStatusDataType_Encoding_DefaultBinary = 864,
    SessionDiagnosticsDataType = 865,
    SessionDiagnosticsDataType_Encoding_DefaultXml = 866,
    SessionDiagnosticsDataType_Encoding_DefaultBinary = 867,
    SessionSecurityDiagnosticsDataType = 868,
    SessionSecurityDiagnosticsDataType_Encoding_DefaultXml = 869,
    SessionSecurityDiagnosticsDataType_Encoding_DefaultBinary = 870,
    ServiceCounterDataType = 871,
    ServiceCounterDataType_Encoding_DefaultXml = 872,
    ServiceCounterDataType_Encoding_DefaultBinary = 873,
    SubscriptionDiagnosticsDataType = 874,
    SubscriptionDiagnosticsDataType_Encoding_DefaultXml = 875,
    SubscriptionDiagnosticsDataType_Encoding_DefaultBinary = 876,
    ModelChangeStructureDataType = 877,
    ModelChangeStructureDataType_Encoding_DefaultXml = 878,
    ModelChangeStructureDataType_Encoding_DefaultBinary = 879,
    Range = 884,
    Range_Encoding_DefaultXml = 885,
    Range_Encoding_DefaultBinary = 886,
    EUInformation = 887,
    EUInformation_Encoding_DefaultXml = 888,
    EUInformation_Encoding_DefaultBinary = 889,
    ExceptionDeviationFormat = 890,
    Annotation = 891,
    Annotation_Encoding_DefaultXml = 892,
    Annotation_Encoding_DefaultBinary = 893,
    ProgramDiagnosticDataType = 894,
    ProgramDiagnosticDataType_Encoding_DefaultXml = 895,
    ProgramDiagnosticDataType_Encoding_DefaultBinary = 896,
    SemanticChangeStructureDataType = 897,
    SemanticChangeStructureDataType_Encoding_DefaultXml = 898,
    SemanticChangeStructureDataType_Encoding_DefaultBinary = 899,
    EventNotificationList = 914,
    EventNotificationList_Encoding_DefaultXml = 915,
    EventNotificationList_Encoding_DefaultBinary = 916,
    EventFieldList = 917,
    EventFieldList_Encoding_DefaultXml = 918,
    EventFieldList_Encoding_DefaultBinary = 919,
    HistoryEventFieldList = 920,
    HistoryEventFieldList_Encoding_DefaultXml = 921,
    HistoryEventFieldList_Encoding_DefaultBinary = 922,
    IssuedIdentityToken = 938,
    IssuedIdentityToken_Encoding_DefaultXml = 939,
    IssuedIdentityToken_Encoding_DefaultBinary = 940,
    NotificationData = 945,
    NotificationData_Encoding_DefaultXml = 946,
    NotificationData_Encoding_DefaultBinary = 947,
    AggregateConfiguration = 948,
    AggregateConfiguration_Encoding_DefaultXml = 949,
    AggregateConfiguration_Encoding_DefaultBinary = 950,
    ImageBMP = 2000,
    ImageGIF = 2001,
    ImageJPG = 2002,
    ImagePNG = 2003,
    ServerType = 2004,
    ServerType_ServerArray = 2005,
    ServerType_NamespaceArray = 2006,
    ServerType_ServerStatus = 2007,
    ServerType_ServiceLevel = 2008,
    ServerType_ServerCapabilities = 2009,
    ServerType_ServerDiagnostics = 2010,
    ServerType_VendorServerInfo = 2011,
    ServerType_ServerRedundancy = 2012,
    ServerCapabilitiesType = 2013,
    ServerCapabilitiesType_ServerProfileArray = 2014,
    ServerCapabilitiesType_LocaleIdArray = 2016,
    ServerCapabilitiesType_MinSupportedSampleRate = 2017,
    ServerCapabilitiesType_ModellingRules = 2019,
    ServerDiagnosticsType = 2020,
    ServerDiagnosticsType_ServerDiagnosticsSummary = 2021,
    ServerDiagnosticsType_SamplingIntervalDiagnosticsArray = 2022,
    ServerDiagnosticsType_SubscriptionDiagnosticsArray = 2023,
    ServerDiagnosticsType_EnabledFlag = 2025,
    SessionsDiagnosticsSummaryType = 2026,
    SessionsDiagnosticsSummaryType_SessionDiagnosticsArray = 2027,
    SessionsDiagnosticsSummaryType_SessionSecurityDiagnosticsArray = 2028,
    SessionDiagnosticsObjectType = 2029,
    SessionDiagnosticsObjectType_SessionDiagnostics = 2030,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics = 2031,
    SessionDiagnosticsObjectType_SubscriptionDiagnosticsArray = 2032,
    VendorServerInfoType = 2033,
    ServerRedundancyType = 2034,
    ServerRedundancyType_RedundancySupport = 2035,
    TransparentRedundancyType = 2036,
    TransparentRedundancyType_CurrentServerId = 2037,
    TransparentRedundancyType_RedundantServerArray = 2038,
    NonTransparentRedundancyType = 2039,
    NonTransparentRedundancyType_ServerUriArray = 2040,
    BaseEventType = 2041,
    BaseEventType_EventId = 2042,
    BaseEventType_EventType = 2043,
    BaseEventType_SourceNode = 2044,
    BaseEventType_SourceName = 2045,
    BaseEventType_Time = 2046,
    BaseEventType_ReceiveTime = 2047,
    BaseEventType_Message = 2050,
    BaseEventType_Severity = 2051,
    AuditEventType = 2052,
    AuditEventType_ActionTimeStamp = 2053,
    AuditEventType_Status = 2054,
    AuditEventType_ServerId = 2055,
    AuditEventType_ClientAuditEntryId = 2056,
    AuditEventType_ClientUserId = 2057,
    AuditSecurityEventType = 2058,
    AuditChannelEventType = 2059,
    AuditOpenSecureChannelEventType = 2060,
    AuditOpenSecureChannelEventType_ClientCertificate = 2061,
    AuditOpenSecureChannelEventType_RequestType = 2062,
    AuditOpenSecureChannelEventType_SecurityPolicyUri = 2063,
    AuditOpenSecureChannelEventType_SecurityMode = 2065,
    AuditOpenSecureChannelEventType_RequestedLifetime = 2066,
    AuditSessionEventType = 2069,
    AuditSessionEventType_SessionId = 2070,
    AuditCreateSessionEventType = 2071,
    AuditCreateSessionEventType_SecureChannelId = 2072,
    AuditCreateSessionEventType_ClientCertificate = 2073,
    AuditCreateSessionEventType_RevisedSessionTimeout = 2074,
    AuditActivateSessionEventType = 2075,
    AuditActivateSessionEventType_ClientSoftwareCertificates = 2076,
    AuditActivateSessionEventType_UserIdentityToken = 2077,
    AuditCancelEventType = 2078,
    AuditCancelEventType_RequestHandle = 2079,
    AuditCertificateEventType = 2080,
    AuditCertificateEventType_Certificate = 2081,
    AuditCertificateDataMismatchEventType = 2082,
    AuditCertificateDataMismatchEventType_InvalidHostname = 2083,
    AuditCertificateDataMismatchEventType_InvalidUri = 2084,
    AuditCertificateExpiredEventType = 2085,
    AuditCertificateInvalidEventType = 2086,
    AuditCertificateUntrustedEventType = 2087,
    AuditCertificateRevokedEventType = 2088,
    AuditCertificateMismatchEventType = 2089,
    AuditNodeManagementEventType = 2090,
    AuditAddNodesEventType = 2091,
    AuditAddNodesEventType_NodesToAdd = 2092,
    AuditDeleteNodesEventType = 2093,
    AuditDeleteNodesEventType_NodesToDelete = 2094,
    AuditAddReferencesEventType = 2095,
    AuditAddReferencesEventType_ReferencesToAdd = 2096,
    AuditDeleteReferencesEventType = 2097,
    AuditDeleteReferencesEventType_ReferencesToDelete = 2098,
    AuditUpdateEventType = 2099,
    AuditWriteUpdateEventType = 2100,
    AuditWriteUpdateEventType_IndexRange = 2101,
    AuditWriteUpdateEventType_OldValue = 2102,
    AuditWriteUpdateEventType_NewValue = 2103,
    AuditHistoryUpdateEventType = 2104,
    AuditUpdateMethodEventType = 2127,
    AuditUpdateMethodEventType_MethodId = 2128,
    AuditUpdateMethodEventType_InputArguments = 2129,
    SystemEventType = 2130,
    DeviceFailureEventType = 2131,
    BaseModelChangeEventType = 2132,
    GeneralModelChangeEventType = 2133,
    GeneralModelChangeEventType_Changes = 2134,
    ServerVendorCapabilityType = 2137,
    ServerStatusType = 2138,
    ServerStatusType_StartTime = 2139,
    ServerStatusType_CurrentTime = 2140,
    ServerStatusType_State = 2141,
    ServerStatusType_BuildInfo = 2142,
    ServerDiagnosticsSummaryType = 2150,
    ServerDiagnosticsSummaryType_ServerViewCount = 2151,
    ServerDiagnosticsSummaryType_CurrentSessionCount = 2152,
    ServerDiagnosticsSummaryType_CumulatedSessionCount = 2153,
    ServerDiagnosticsSummaryType_SecurityRejectedSessionCount = 2154,
    ServerDiagnosticsSummaryType_RejectedSessionCount = 2155,
    ServerDiagnosticsSummaryType_SessionTimeoutCount = 2156,
    ServerDiagnosticsSummaryType_SessionAbortCount = 2157,
    ServerDiagnosticsSummaryType_PublishingIntervalCount = 2159,
    ServerDiagnosticsSummaryType_CurrentSubscriptionCount = 2160,
    ServerDiagnosticsSummaryType_CumulatedSubscriptionCount = 2161,
    ServerDiagnosticsSummaryType_SecurityRejectedRequestsCount = 2162,
    ServerDiagnosticsSummaryType_RejectedRequestsCount = 2163,
    SamplingIntervalDiagnosticsArrayType = 2164,
    SamplingIntervalDiagnosticsType = 2165,
    SamplingIntervalDiagnosticsType_SamplingInterval = 2166,
    SubscriptionDiagnosticsArrayType = 2171,
    SubscriptionDiagnosticsType = 2172,
    SubscriptionDiagnosticsType_SessionId = 2173,
    SubscriptionDiagnosticsType_SubscriptionId = 2174,
    SubscriptionDiagnosticsType_Priority = 2175,
    SubscriptionDiagnosticsType_PublishingInterval = 2176,
    SubscriptionDiagnosticsType_MaxKeepAliveCount = 2177,
    SubscriptionDiagnosticsType_MaxNotificationsPerPublish = 2179,
    SubscriptionDiagnosticsType_PublishingEnabled = 2180,
    SubscriptionDiagnosticsType_ModifyCount = 2181,
    SubscriptionDiagnosticsType_EnableCount = 2182,
    SubscriptionDiagnosticsType_DisableCount = 2183,
    SubscriptionDiagnosticsType_RepublishRequestCount = 2184,
    SubscriptionDiagnosticsType_RepublishMessageRequestCount = 2185,
    SubscriptionDiagnosticsType_RepublishMessageCount = 2186,
    SubscriptionDiagnosticsType_TransferRequestCount = 2187,
    SubscriptionDiagnosticsType_TransferredToAltClientCount = 2188,
    SubscriptionDiagnosticsType_TransferredToSameClientCount = 2189,
    SubscriptionDiagnosticsType_PublishRequestCount = 2190,
    SubscriptionDiagnosticsType_DataChangeNotificationsCount = 2191,
    SubscriptionDiagnosticsType_NotificationsCount = 2193,
    SessionDiagnosticsArrayType = 2196,
    SessionDiagnosticsVariableType = 2197,
    SessionDiagnosticsVariableType_SessionId = 2198,
    SessionDiagnosticsVariableType_SessionName = 2199,
    SessionDiagnosticsVariableType_ClientDescription = 2200,
    SessionDiagnosticsVariableType_ServerUri = 2201,
    SessionDiagnosticsVariableType_EndpointUrl = 2202,
    SessionDiagnosticsVariableType_LocaleIds = 2203,
    SessionDiagnosticsVariableType_ActualSessionTimeout = 2204,
    SessionDiagnosticsVariableType_ClientConnectionTime = 2205,
    SessionDiagnosticsVariableType_ClientLastContactTime = 2206,
    SessionDiagnosticsVariableType_CurrentSubscriptionsCount = 2207,
    SessionDiagnosticsVariableType_CurrentMonitoredItemsCount = 2208,
    SessionDiagnosticsVariableType_CurrentPublishRequestsInQueue = 2209,
    SessionDiagnosticsVariableType_ReadCount = 2217,
    SessionDiagnosticsVariableType_HistoryReadCount = 2218,
    SessionDiagnosticsVariableType_WriteCount = 2219,
    SessionDiagnosticsVariableType_HistoryUpdateCount = 2220,
    SessionDiagnosticsVariableType_CallCount = 2221,
    SessionDiagnosticsVariableType_CreateMonitoredItemsCount = 2222,
    SessionDiagnosticsVariableType_ModifyMonitoredItemsCount = 2223,
    SessionDiagnosticsVariableType_SetMonitoringModeCount = 2224,
    SessionDiagnosticsVariableType_SetTriggeringCount = 2225,
    SessionDiagnosticsVariableType_DeleteMonitoredItemsCount = 2226,
    SessionDiagnosticsVariableType_CreateSubscriptionCount = 2227,
    SessionDiagnosticsVariableType_ModifySubscriptionCount = 2228,
    SessionDiagnosticsVariableType_SetPublishingModeCount = 2229,
    SessionDiagnosticsVariableType_PublishCount = 2230,
    SessionDiagnosticsVariableType_RepublishCount = 2231,
    SessionDiagnosticsVariableType_TransferSubscriptionsCount = 2232,
    SessionDiagnosticsVariableType_DeleteSubscriptionsCount = 2233,
    SessionDiagnosticsVariableType_AddNodesCount = 2234,
    SessionDiagnosticsVariableType_AddReferencesCount = 2235,
    SessionDiagnosticsVariableType_DeleteNodesCount = 2236,
    SessionDiagnosticsVariableType_DeleteReferencesCount = 2237,
    SessionDiagnosticsVariableType_BrowseCount = 2238,
    SessionDiagnosticsVariableType_BrowseNextCount = 2239,
    SessionDiagnosticsVariableType_TranslateBrowsePathsToNodeIdsCount = 2240,
    SessionDiagnosticsVariableType_QueryFirstCount = 2241,
    SessionDiagnosticsVariableType_QueryNextCount = 2242,
    SessionSecurityDiagnosticsArrayType = 2243,
    SessionSecurityDiagnosticsType = 2244,
    SessionSecurityDiagnosticsType_SessionId = 2245,
    SessionSecurityDiagnosticsType_ClientUserIdOfSession = 2246,
    SessionSecurityDiagnosticsType_ClientUserIdHistory = 2247,
    SessionSecurityDiagnosticsType_AuthenticationMechanism = 2248,
    SessionSecurityDiagnosticsType_Encoding = 2249,
    SessionSecurityDiagnosticsType_TransportProtocol = 2250,
    SessionSecurityDiagnosticsType_SecurityMode = 2251,
    SessionSecurityDiagnosticsType_SecurityPolicyUri = 2252,
    Server = 2253,
    Server_ServerArray = 2254,
    Server_NamespaceArray = 2255,
    Server_ServerStatus = 2256,
    Server_ServerStatus_StartTime = 2257,
    Server_ServerStatus_CurrentTime = 2258,
    Server_ServerStatus_State = 2259,
    Server_ServerStatus_BuildInfo = 2260,
    Server_ServerStatus_BuildInfo_ProductName = 2261,
    Server_ServerStatus_BuildInfo_ProductUri = 2262,
    Server_ServerStatus_BuildInfo_ManufacturerName = 2263,
    Server_ServerStatus_BuildInfo_SoftwareVersion = 2264,
    Server_ServerStatus_BuildInfo_BuildNumber = 2265,
    Server_ServerStatus_BuildInfo_BuildDate = 2266,
    Server_ServiceLevel = 2267,
    Server_ServerCapabilities = 2268,
    Server_ServerCapabilities_ServerProfileArray = 2269,
    Server_ServerCapabilities_LocaleIdArray = 2271,
    Server_ServerCapabilities_MinSupportedSampleRate = 2272,
    Server_ServerDiagnostics = 2274,
    Server_ServerDiagnostics_ServerDiagnosticsSummary = 2275,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_ServerViewCount = 2276,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_CurrentSessionCount = 2277,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_CumulatedSessionCount = 2278,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_SecurityRejectedSessionCount = 2279,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_SessionTimeoutCount = 2281,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_SessionAbortCount = 2282,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_PublishingIntervalCount = 2284,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_CurrentSubscriptionCount = 2285,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_CumulatedSubscriptionCount = 2286,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_SecurityRejectedRequestsCount = 2287,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_RejectedRequestsCount = 2288,
    Server_ServerDiagnostics_SamplingIntervalDiagnosticsArray = 2289,
    Server_ServerDiagnostics_SubscriptionDiagnosticsArray = 2290,
    Server_ServerDiagnostics_EnabledFlag = 2294,
    Server_VendorServerInfo = 2295,
    Server_ServerRedundancy = 2296,
    StateMachineType = 2299,
    StateType = 2307,
    StateType_StateNumber = 2308,
    InitialStateType = 2309,
    TransitionType = 2310,
    TransitionEventType = 2311,
    TransitionType_TransitionNumber = 2312,
    AuditUpdateStateEventType = 2315,
    HistoricalDataConfigurationType = 2318,
    HistoricalDataConfigurationType_Stepped = 2323,
    HistoricalDataConfigurationType_Definition = 2324,
    HistoricalDataConfigurationType_MaxTimeInterval = 2325,
    HistoricalDataConfigurationType_MinTimeInterval = 2326,
    HistoricalDataConfigurationType_ExceptionDeviation = 2327,
    HistoricalDataConfigurationType_ExceptionDeviationFormat = 2328,
    HistoryServerCapabilitiesType = 2330,
    HistoryServerCapabilitiesType_AccessHistoryDataCapability = 2331,
    HistoryServerCapabilitiesType_AccessHistoryEventsCapability = 2332,
    HistoryServerCapabilitiesType_InsertDataCapability = 2334,
    HistoryServerCapabilitiesType_ReplaceDataCapability = 2335,
    HistoryServerCapabilitiesType_UpdateDataCapability = 2336,
    HistoryServerCapabilitiesType_DeleteRawCapability = 2337,
    HistoryServerCapabilitiesType_DeleteAtTimeCapability = 2338,
    AggregateFunctionType = 2340,
    AggregateFunction_Interpolative = 2341,
    AggregateFunction_Average = 2342,
    AggregateFunction_TimeAverage = 2343,
    AggregateFunction_Total = 2344,
    AggregateFunction_Minimum = 2346,
    AggregateFunction_Maximum = 2347,
    AggregateFunction_MinimumActualTime = 2348,
    AggregateFunction_MaximumActualTime = 2349,
    AggregateFunction_Range = 2350,
    AggregateFunction_AnnotationCount = 2351,
    AggregateFunction_Count = 2352,
    AggregateFunction_NumberOfTransitions = 2355,
    AggregateFunction_Start = 2357,
    AggregateFunction_End = 2358,
    AggregateFunction_Delta = 2359,
    AggregateFunction_DurationGood = 2360,
    AggregateFunction_DurationBad = 2361,
    AggregateFunction_PercentGood = 2362,
    AggregateFunction_PercentBad = 2363,
    AggregateFunction_WorstQuality = 2364,
    DataItemType = 2365,
    DataItemType_Definition = 2366,
    DataItemType_ValuePrecision = 2367,
    AnalogItemType = 2368,
    AnalogItemType_EURange = 2369,
    AnalogItemType_InstrumentRange = 2370,
    AnalogItemType_EngineeringUnits = 2371,
    DiscreteItemType = 2372,
    TwoStateDiscreteType = 2373,
    TwoStateDiscreteType_FalseState = 2374,
    TwoStateDiscreteType_TrueState = 2375,
    MultiStateDiscreteType = 2376,
    MultiStateDiscreteType_EnumStrings = 2377,
    ProgramTransitionEventType = 2378,
    ProgramTransitionEventType_IntermediateResult = 2379,
    ProgramDiagnosticType = 2380,
    ProgramDiagnosticType_CreateSessionId = 2381,
    ProgramDiagnosticType_CreateClientName = 2382,
    ProgramDiagnosticType_InvocationCreationTime = 2383,
    ProgramDiagnosticType_LastTransitionTime = 2384,
    ProgramDiagnosticType_LastMethodCall = 2385,
    ProgramDiagnosticType_LastMethodSessionId = 2386,
    ProgramDiagnosticType_LastMethodInputArguments = 2387,
    ProgramDiagnosticType_LastMethodOutputArguments = 2388,
    ProgramDiagnosticType_LastMethodCallTime = 2389,
    ProgramDiagnosticType_LastMethodReturnStatus = 2390,
    ProgramStateMachineType = 2391,
    ProgramStateMachineType_Creatable = 2392,
    ProgramStateMachineType_Deletable = 2393,
    ProgramStateMachineType_AutoDelete = 2394,
    ProgramStateMachineType_RecycleCount = 2395,
    ProgramStateMachineType_InstanceCount = 2396,
    ProgramStateMachineType_MaxInstanceCount = 2397,
    ProgramStateMachineType_MaxRecycleCount = 2398,
    ProgramStateMachineType_ProgramDiagnostic = 2399,
    ProgramStateMachineType_Ready = 2400,
    ProgramStateMachineType_Ready_StateNumber = 2401,
    ProgramStateMachineType_Running = 2402,
    ProgramStateMachineType_Running_StateNumber = 2403,
    ProgramStateMachineType_Suspended = 2404,
    ProgramStateMachineType_Suspended_StateNumber = 2405,
    ProgramStateMachineType_Halted = 2406,
    ProgramStateMachineType_Halted_StateNumber = 2407,
    ProgramStateMachineType_HaltedToReady = 2408,
    ProgramStateMachineType_HaltedToReady_TransitionNumber = 2409,
    ProgramStateMachineType_ReadyToRunning = 2410,
    ProgramStateMachineType_ReadyToRunning_TransitionNumber = 2411,
    ProgramStateMachineType_RunningToHalted = 2412,
    ProgramStateMachineType_RunningToHalted_TransitionNumber = 2413,
    ProgramStateMachineType_RunningToReady = 2414,
    ProgramStateMachineType_RunningToReady_TransitionNumber = 2415,
    ProgramStateMachineType_RunningToSuspended = 2416,
    ProgramStateMachineType_RunningToSuspended_TransitionNumber = 2417,
    ProgramStateMachineType_SuspendedToRunning = 2418,
    ProgramStateMachineType_SuspendedToRunning_TransitionNumber = 2419,
    ProgramStateMachineType_SuspendedToHalted = 2420,
    ProgramStateMachineType_SuspendedToHalted_TransitionNumber = 2421,
    ProgramStateMachineType_SuspendedToReady = 2422,
    ProgramStateMachineType_SuspendedToReady_TransitionNumber = 2423,
    ProgramStateMachineType_ReadyToHalted = 2424,
    ProgramStateMachineType_ReadyToHalted_TransitionNumber = 2425,
    ProgramStateMachineType_Start = 2426,
    ProgramStateMachineType_Suspend = 2427,
    ProgramStateMachineType_Resume = 2428,
    ProgramStateMachineType_Halt = 2429,
    ProgramStateMachineType_Reset = 2430,
    SessionDiagnosticsVariableType_RegisterNodesCount = 2730,
    SessionDiagnosticsVariableType_UnregisterNodesCount = 2731,
    ServerCapabilitiesType_MaxBrowseContinuationPoints = 2732,
    ServerCapabilitiesType_MaxQueryContinuationPoints = 2733,
    ServerCapabilitiesType_MaxHistoryContinuationPoints = 2734,
    Server_ServerCapabilities_MaxBrowseContinuationPoints = 2735,
    Server_ServerCapabilities_MaxQueryContinuationPoints = 2736,
    Server_ServerCapabilities_MaxHistoryContinuationPoints = 2737,
    SemanticChangeEventType = 2738,
    SemanticChangeEventType_Changes = 2739,
    ServerType_Auditing = 2742,
    ServerDiagnosticsType_SessionsDiagnosticsSummary = 2744,
    AuditChannelEventType_SecureChannelId = 2745,
    AuditOpenSecureChannelEventType_ClientCertificateThumbprint = 2746,
    AuditCreateSessionEventType_ClientCertificateThumbprint = 2747,
    AuditUrlMismatchEventType = 2748,
    AuditUrlMismatchEventType_EndpointUrl = 2749,
    AuditWriteUpdateEventType_AttributeId = 2750,
    AuditHistoryUpdateEventType_ParameterDataTypeId = 2751,
    ServerStatusType_SecondsTillShutdown = 2752,
    ServerStatusType_ShutdownReason = 2753,
    ServerCapabilitiesType_AggregateFunctions = 2754,
    StateVariableType = 2755,
    StateVariableType_Id = 2756,
    StateVariableType_Name = 2757,
    StateVariableType_Number = 2758,
    StateVariableType_EffectiveDisplayName = 2759,
    FiniteStateVariableType = 2760,
    FiniteStateVariableType_Id = 2761,
    TransitionVariableType = 2762,
    TransitionVariableType_Id = 2763,
    TransitionVariableType_Name = 2764,
    TransitionVariableType_Number = 2765,
    TransitionVariableType_TransitionTime = 2766,
    FiniteTransitionVariableType = 2767,
    FiniteTransitionVariableType_Id = 2768,
    StateMachineType_CurrentState = 2769,
    StateMachineType_LastTransition = 2770,
    FiniteStateMachineType = 2771,
    FiniteStateMachineType_CurrentState = 2772,
    FiniteStateMachineType_LastTransition = 2773,
    TransitionEventType_Transition = 2774,
    TransitionEventType_FromState = 2775,
    TransitionEventType_ToState = 2776,
    AuditUpdateStateEventType_OldStateId = 2777,
    AuditUpdateStateEventType_NewStateId = 2778,
    ConditionType = 2782,
    RefreshStartEventType = 2787,
    RefreshEndEventType = 2788,
    RefreshRequiredEventType = 2789,
    AuditConditionEventType = 2790,
    AuditConditionEnableEventType = 2803,
    AuditConditionCommentEventType = 2829,
    DialogConditionType = 2830,
    DialogConditionType_Prompt = 2831,
    AcknowledgeableConditionType = 2881,
    AlarmConditionType = 2915,
    ShelvedStateMachineType = 2929,
    ShelvedStateMachineType_Unshelved = 2930,
    ShelvedStateMachineType_TimedShelved = 2932,
    ShelvedStateMachineType_OneShotShelved = 2933,
    ShelvedStateMachineType_UnshelvedToTimedShelved = 2935,
    ShelvedStateMachineType_UnshelvedToOneShotShelved = 2936,
    ShelvedStateMachineType_TimedShelvedToUnshelved = 2940,
    ShelvedStateMachineType_TimedShelvedToOneShotShelved = 2942,
    ShelvedStateMachineType_OneShotShelvedToUnshelved = 2943,
    ShelvedStateMachineType_OneShotShelvedToTimedShelved = 2945,
    ShelvedStateMachineType_Unshelve = 2947,
    ShelvedStateMachineType_OneShotShelve = 2948,
    ShelvedStateMachineType_TimedShelve = 2949,
    LimitAlarmType = 2955,
    ShelvedStateMachineType_TimedShelve_InputArguments = 2991,
    Server_ServerStatus_SecondsTillShutdown = 2992,
    Server_ServerStatus_ShutdownReason = 2993,
    Server_Auditing = 2994,
    Server_ServerCapabilities_ModellingRules = 2996,
    Server_ServerCapabilities_AggregateFunctions = 2997,
    SubscriptionDiagnosticsType_EventNotificationsCount = 2998,
    AuditHistoryEventUpdateEventType = 2999,
    AuditHistoryEventUpdateEventType_Filter = 3003,
    AuditHistoryValueUpdateEventType = 3006,
    AuditHistoryDeleteEventType = 3012,
    AuditHistoryRawModifyDeleteEventType = 3014,
    AuditHistoryRawModifyDeleteEventType_IsDeleteModified = 3015,
    AuditHistoryRawModifyDeleteEventType_StartTime = 3016,
    AuditHistoryRawModifyDeleteEventType_EndTime = 3017,
    AuditHistoryAtTimeDeleteEventType = 3019,
    AuditHistoryAtTimeDeleteEventType_ReqTimes = 3020,
    AuditHistoryAtTimeDeleteEventType_OldValues = 3021,
    AuditHistoryEventDeleteEventType = 3022,
    AuditHistoryEventDeleteEventType_EventIds = 3023,
    AuditHistoryEventDeleteEventType_OldValues = 3024,
    AuditHistoryEventUpdateEventType_UpdatedNode = 3025,
    AuditHistoryValueUpdateEventType_UpdatedNode = 3026,
    AuditHistoryDeleteEventType_UpdatedNode = 3027,
    AuditHistoryEventUpdateEventType_PerformInsertReplace = 3028,
    AuditHistoryEventUpdateEventType_NewValues = 3029,
    AuditHistoryEventUpdateEventType_OldValues = 3030,
    AuditHistoryValueUpdateEventType_PerformInsertReplace = 3031,
    AuditHistoryValueUpdateEventType_NewValues = 3032,
    AuditHistoryValueUpdateEventType_OldValues = 3033,
    AuditHistoryRawModifyDeleteEventType_OldValues = 3034,
    EventQueueOverflowEventType = 3035,
    EventTypesFolder = 3048,
    ServerCapabilitiesType_SoftwareCertificates = 3049,
    SessionDiagnosticsVariableType_MaxResponseMessageSize = 3050,
    BuildInfoType = 3051,
    BuildInfoType_ProductUri = 3052,
    BuildInfoType_ManufacturerName = 3053,
    BuildInfoType_ProductName = 3054,
    BuildInfoType_SoftwareVersion = 3055,
    BuildInfoType_BuildNumber = 3056,
    BuildInfoType_BuildDate = 3057,
    SessionSecurityDiagnosticsType_ClientCertificate = 3058,
    HistoricalDataConfigurationType_AggregateConfiguration = 3059,
    DefaultBinary = 3062,
    DefaultXml = 3063,
    AlwaysGeneratesEvent = 3065,
    Icon = 3067,
    NodeVersion = 3068,
    LocalTime = 3069,
    AllowNulls = 3070,
    EnumValues = 3071,
    InputArguments = 3072,
    OutputArguments = 3073,
    ServerType_ServerStatus_StartTime = 3074,
    ServerType_ServerStatus_CurrentTime = 3075,
    ServerType_ServerStatus_State = 3076,
    ServerType_ServerStatus_BuildInfo = 3077,
    ServerType_ServerStatus_BuildInfo_ProductUri = 3078,
    ServerType_ServerStatus_BuildInfo_ManufacturerName = 3079,
    ServerType_ServerStatus_BuildInfo_ProductName = 3080,
    ServerType_ServerStatus_BuildInfo_SoftwareVersion = 3081,
    ServerType_ServerStatus_BuildInfo_BuildNumber = 3082,
    ServerType_ServerStatus_BuildInfo_BuildDate = 3083,
    ServerType_ServerStatus_SecondsTillShutdown = 3084,
    ServerType_ServerStatus_ShutdownReason = 3085,
    ServerType_ServerCapabilities_ServerProfileArray = 3086,
    ServerType_ServerCapabilities_LocaleIdArray = 3087,
    ServerType_ServerCapabilities_MinSupportedSampleRate = 3088,
    ServerType_ServerCapabilities_MaxBrowseContinuationPoints = 3089,
    ServerType_ServerCapabilities_MaxQueryContinuationPoints = 3090,
    ServerType_ServerCapabilities_MaxHistoryContinuationPoints = 3091,
    ServerType_ServerCapabilities_SoftwareCertificates = 3092,
    ServerType_ServerCapabilities_ModellingRules = 3093,
    ServerType_ServerCapabilities_AggregateFunctions = 3094,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary = 3095,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_ServerViewCount = 3096,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_CurrentSessionCount = 3097,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_CumulatedSessionCount = 3098,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_SecurityRejectedSessionCount = 3099,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_RejectedSessionCount = 3100,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_SessionTimeoutCount = 3101,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_SessionAbortCount = 3102,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_PublishingIntervalCount = 3104,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_CurrentSubscriptionCount = 3105,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_CumulatedSubscriptionCount = 3106,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_SecurityRejectedRequestsCount = 3107,
    ServerType_ServerDiagnostics_ServerDiagnosticsSummary_RejectedRequestsCount = 3108,
    ServerType_ServerDiagnostics_SamplingIntervalDiagnosticsArray = 3109,
    ServerType_ServerDiagnostics_SubscriptionDiagnosticsArray = 3110,
    ServerType_ServerDiagnostics_SessionsDiagnosticsSummary = 3111,
    ServerType_ServerDiagnostics_SessionsDiagnosticsSummary_SessionDiagnosticsArray = 3112,
    ServerType_ServerDiagnostics_SessionsDiagnosticsSummary_SessionSecurityDiagnosticsArray = 3113,
    ServerType_ServerDiagnostics_EnabledFlag = 3114,
    ServerType_ServerRedundancy_RedundancySupport = 3115,
    ServerDiagnosticsType_ServerDiagnosticsSummary_ServerViewCount = 3116,
    ServerDiagnosticsType_ServerDiagnosticsSummary_CurrentSessionCount = 3117,
    ServerDiagnosticsType_ServerDiagnosticsSummary_CumulatedSessionCount = 3118,
    ServerDiagnosticsType_ServerDiagnosticsSummary_SecurityRejectedSessionCount = 3119,
    ServerDiagnosticsType_ServerDiagnosticsSummary_RejectedSessionCount = 3120,
    ServerDiagnosticsType_ServerDiagnosticsSummary_SessionTimeoutCount = 3121,
    ServerDiagnosticsType_ServerDiagnosticsSummary_SessionAbortCount = 3122,
    ServerDiagnosticsType_ServerDiagnosticsSummary_PublishingIntervalCount = 3124,
    ServerDiagnosticsType_ServerDiagnosticsSummary_CurrentSubscriptionCount = 3125,
    ServerDiagnosticsType_ServerDiagnosticsSummary_CumulatedSubscriptionCount = 3126,
    ServerDiagnosticsType_ServerDiagnosticsSummary_SecurityRejectedRequestsCount = 3127,
    ServerDiagnosticsType_ServerDiagnosticsSummary_RejectedRequestsCount = 3128,
    ServerDiagnosticsType_SessionsDiagnosticsSummary_SessionDiagnosticsArray = 3129,
    ServerDiagnosticsType_SessionsDiagnosticsSummary_SessionSecurityDiagnosticsArray = 3130,
    SessionDiagnosticsObjectType_SessionDiagnostics_SessionId = 3131,
    SessionDiagnosticsObjectType_SessionDiagnostics_SessionName = 3132,
    SessionDiagnosticsObjectType_SessionDiagnostics_ClientDescription = 3133,
    SessionDiagnosticsObjectType_SessionDiagnostics_ServerUri = 3134,
    SessionDiagnosticsObjectType_SessionDiagnostics_EndpointUrl = 3135,
    SessionDiagnosticsObjectType_SessionDiagnostics_LocaleIds = 3136,
    SessionDiagnosticsObjectType_SessionDiagnostics_ActualSessionTimeout = 3137,
    SessionDiagnosticsObjectType_SessionDiagnostics_MaxResponseMessageSize = 3138,
    SessionDiagnosticsObjectType_SessionDiagnostics_ClientConnectionTime = 3139,
    SessionDiagnosticsObjectType_SessionDiagnostics_ClientLastContactTime = 3140,
    SessionDiagnosticsObjectType_SessionDiagnostics_CurrentSubscriptionsCount = 3141,
    SessionDiagnosticsObjectType_SessionDiagnostics_CurrentMonitoredItemsCount = 3142,
    SessionDiagnosticsObjectType_SessionDiagnostics_CurrentPublishRequestsInQueue = 3143,
    SessionDiagnosticsObjectType_SessionDiagnostics_ReadCount = 3151,
    SessionDiagnosticsObjectType_SessionDiagnostics_HistoryReadCount = 3152,
    SessionDiagnosticsObjectType_SessionDiagnostics_WriteCount = 3153,
    SessionDiagnosticsObjectType_SessionDiagnostics_HistoryUpdateCount = 3154,
    SessionDiagnosticsObjectType_SessionDiagnostics_CallCount = 3155,
    SessionDiagnosticsObjectType_SessionDiagnostics_CreateMonitoredItemsCount = 3156,
    SessionDiagnosticsObjectType_SessionDiagnostics_ModifyMonitoredItemsCount = 3157,
    SessionDiagnosticsObjectType_SessionDiagnostics_SetMonitoringModeCount = 3158,
    SessionDiagnosticsObjectType_SessionDiagnostics_SetTriggeringCount = 3159,
    SessionDiagnosticsObjectType_SessionDiagnostics_DeleteMonitoredItemsCount = 3160,
    SessionDiagnosticsObjectType_SessionDiagnostics_CreateSubscriptionCount = 3161,
    SessionDiagnosticsObjectType_SessionDiagnostics_ModifySubscriptionCount = 3162,
    SessionDiagnosticsObjectType_SessionDiagnostics_SetPublishingModeCount = 3163,
    SessionDiagnosticsObjectType_SessionDiagnostics_PublishCount = 3164,
    SessionDiagnosticsObjectType_SessionDiagnostics_RepublishCount = 3165,
    SessionDiagnosticsObjectType_SessionDiagnostics_TransferSubscriptionsCount = 3166,
    SessionDiagnosticsObjectType_SessionDiagnostics_DeleteSubscriptionsCount = 3167,
    SessionDiagnosticsObjectType_SessionDiagnostics_AddNodesCount = 3168,
    SessionDiagnosticsObjectType_SessionDiagnostics_AddReferencesCount = 3169,
    SessionDiagnosticsObjectType_SessionDiagnostics_DeleteNodesCount = 3170,
    SessionDiagnosticsObjectType_SessionDiagnostics_DeleteReferencesCount = 3171,
    SessionDiagnosticsObjectType_SessionDiagnostics_BrowseCount = 3172,
    SessionDiagnosticsObjectType_SessionDiagnostics_BrowseNextCount = 3173,
    SessionDiagnosticsObjectType_SessionDiagnostics_TranslateBrowsePathsToNodeIdsCount = 3174,
    SessionDiagnosticsObjectType_SessionDiagnostics_QueryFirstCount = 3175,
    SessionDiagnosticsObjectType_SessionDiagnostics_QueryNextCount = 3176,
    SessionDiagnosticsObjectType_SessionDiagnostics_RegisterNodesCount = 3177,
    SessionDiagnosticsObjectType_SessionDiagnostics_UnregisterNodesCount = 3178,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_SessionId = 3179,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_ClientUserIdOfSession = 3180,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_ClientUserIdHistory = 3181,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_AuthenticationMechanism = 3182,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_Encoding = 3183,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_TransportProtocol = 3184,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_SecurityMode = 3185,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_SecurityPolicyUri = 3186,
    SessionDiagnosticsObjectType_SessionSecurityDiagnostics_ClientCertificate = 3187,
    TransparentRedundancyType_RedundancySupport = 3188,
    NonTransparentRedundancyType_RedundancySupport = 3189,
    BaseEventType_LocalTime = 3190,
    EventQueueOverflowEventType_EventId = 3191,
    EventQueueOverflowEventType_EventType = 3192,
    EventQueueOverflowEventType_SourceNode = 3193,
    EventQueueOverflowEventType_SourceName = 3194,
    EventQueueOverflowEventType_Time = 3195,
    EventQueueOverflowEventType_ReceiveTime = 3196,
    EventQueueOverflowEventType_LocalTime = 3197,
    EventQueueOverflowEventType_Message = 3198,
    EventQueueOverflowEventType_Severity = 3199,
    AuditEventType_EventId = 3200,
    AuditEventType_EventType = 3201,
    AuditEventType_SourceNode = 3202,
    AuditEventType_SourceName = 3203,
    AuditEventType_Time = 3204,
    AuditEventType_ReceiveTime = 3205,
    AuditEventType_LocalTime = 3206,
    AuditEventType_Message = 3207,
    AuditEventType_Severity = 3208,
    AuditSecurityEventType_EventId = 3209,
    AuditSecurityEventType_EventType = 3210,
    AuditSecurityEventType_SourceNode = 3211,
    AuditSecurityEventType_SourceName = 3212,
    AuditSecurityEventType_Time = 3213,
    AuditSecurityEventType_ReceiveTime = 3214,
    AuditSecurityEventType_LocalTime = 3215,
    AuditSecurityEventType_Message = 3216,
    AuditSecurityEventType_Severity = 3217,
    AuditSecurityEventType_ActionTimeStamp = 3218,
    AuditSecurityEventType_Status = 3219,
    AuditSecurityEventType_ServerId = 3220,
    AuditSecurityEventType_ClientAuditEntryId = 3221,
    AuditSecurityEventType_ClientUserId = 3222,
    AuditChannelEventType_EventId = 3223,
    AuditChannelEventType_EventType = 3224,
    AuditChannelEventType_SourceNode = 3225,
    AuditChannelEventType_SourceName = 3226,
    AuditChannelEventType_Time = 3227,
    AuditChannelEventType_ReceiveTime = 3228,
    AuditChannelEventType_LocalTime = 3229,
    AuditChannelEventType_Message = 3230,
    AuditChannelEventType_Severity = 3231,
    AuditChannelEventType_ActionTimeStamp = 3232,
    AuditChannelEventType_Status = 3233,
    AuditChannelEventType_ServerId = 3234,
    AuditChannelEventType_ClientAuditEntryId = 3235,
    AuditChannelEventType_ClientUserId = 3236,
    AuditOpenSecureChannelEventType_EventId = 3237,
    AuditOpenSecureChannelEventType_EventType = 3238,
    AuditOpenSecureChannelEventType_SourceNode = 3239,
    AuditOpenSecureChannelEventType_SourceName = 3240,
    AuditOpenSecureChannelEventType_Time = 3241,
    AuditOpenSecureChannelEventType_ReceiveTime = 3242,
    AuditOpenSecureChannelEventType_LocalTime = 3243,
    AuditOpenSecureChannelEventType_Message = 3244,
    AuditOpenSecureChannelEventType_Severity = 3245,
    AuditOpenSecureChannelEventType_ActionTimeStamp = 3246,
    AuditOpenSecureChannelEventType_Status = 3247,
    AuditOpenSecureChannelEventType_ServerId = 3248,
    AuditOpenSecureChannelEventType_ClientAuditEntryId = 3249,
    AuditOpenSecureChannelEventType_ClientUserId = 3250,
    AuditOpenSecureChannelEventType_SecureChannelId = 3251,
    AuditSessionEventType_EventId = 3252,
    AuditSessionEventType_EventType = 3253,
    AuditSessionEventType_SourceNode = 3254,
    AuditSessionEventType_SourceName = 3255,
    AuditSessionEventType_Time = 3256,
    AuditSessionEventType_ReceiveTime = 3257,
    AuditSessionEventType_LocalTime = 3258,
    AuditSessionEventType_Message = 3259,
    AuditSessionEventType_Severity = 3260,
    AuditSessionEventType_ActionTimeStamp = 3261,
    AuditSessionEventType_Status = 3262,
    AuditSessionEventType_ServerId = 3263,
    AuditSessionEventType_ClientAuditEntryId = 3264,
    AuditSessionEventType_ClientUserId = 3265,
    AuditCreateSessionEventType_EventId = 3266,
    AuditCreateSessionEventType_EventType = 3267,
    AuditCreateSessionEventType_SourceNode = 3268,
    AuditCreateSessionEventType_SourceName = 3269,
    AuditCreateSessionEventType_Time = 3270,
    AuditCreateSessionEventType_ReceiveTime = 3271,
    AuditCreateSessionEventType_LocalTime = 3272,
    AuditCreateSessionEventType_Message = 3273,
    AuditCreateSessionEventType_Severity = 3274,
    AuditCreateSessionEventType_ActionTimeStamp = 3275,
    AuditCreateSessionEventType_Status = 3276,
    AuditCreateSessionEventType_ServerId = 3277,
    AuditCreateSessionEventType_ClientAuditEntryId = 3278,
    AuditCreateSessionEventType_ClientUserId = 3279,
    AuditUrlMismatchEventType_EventId = 3281,
    AuditUrlMismatchEventType_EventType = 3282,
    AuditUrlMismatchEventType_SourceNode = 3283,
    AuditUrlMismatchEventType_SourceName = 3284,
    AuditUrlMismatchEventType_Time = 3285,
    AuditUrlMismatchEventType_ReceiveTime = 3286,
    AuditUrlMismatchEventType_LocalTime = 3287,
    AuditUrlMismatchEventType_Message = 3288,
    AuditUrlMismatchEventType_Severity = 3289,
    AuditUrlMismatchEventType_ActionTimeStamp = 3290,
    AuditUrlMismatchEventType_Status = 3291,
    AuditUrlMismatchEventType_ServerId = 3292,
    AuditUrlMismatchEventType_ClientAuditEntryId = 3293,
    AuditUrlMismatchEventType_ClientUserId = 3294,
    AuditUrlMismatchEventType_SecureChannelId = 3296,
    AuditUrlMismatchEventType_ClientCertificate = 3297,
    AuditUrlMismatchEventType_ClientCertificateThumbprint = 3298,
    AuditUrlMismatchEventType_RevisedSessionTimeout = 3299,
    AuditActivateSessionEventType_EventId = 3300,
    AuditActivateSessionEventType_EventType = 3301,
    AuditActivateSessionEventType_SourceNode = 3302,
    AuditActivateSessionEventType_SourceName = 3303,
    AuditActivateSessionEventType_Time = 3304,
    AuditActivateSessionEventType_ReceiveTime = 3305,
    AuditActivateSessionEventType_LocalTime = 3306,
    AuditActivateSessionEventType_Message = 3307,
    AuditActivateSessionEventType_Severity = 3308,
    AuditActivateSessionEventType_ActionTimeStamp = 3309,
    AuditActivateSessionEventType_Status = 3310,
    AuditActivateSessionEventType_ServerId = 3311,
    AuditActivateSessionEventType_ClientAuditEntryId = 3312,
    AuditActivateSessionEventType_ClientUserId = 3313,
    AuditActivateSessionEventType_SessionId = 3314,
    AuditCancelEventType_EventId = 3315,
    AuditCancelEventType_EventType = 3316,
    AuditCancelEventType_SourceNode = 3317,
    AuditCancelEventType_SourceName = 3318,
    AuditCancelEventType_Time = 3319,
    AuditCancelEventType_ReceiveTime = 3320,
    AuditCancelEventType_LocalTime = 3321,
    AuditCancelEventType_Message = 3322,
    AuditCancelEventType_Severity = 3323,
    AuditCancelEventType_ActionTimeStamp = 3324,
    AuditCancelEventType_Status = 3325,
    AuditCancelEventType_ServerId = 3326,
    AuditCancelEventType_ClientAuditEntryId = 3327,
    AuditCancelEventType_ClientUserId = 3328,
    AuditCancelEventType_SessionId = 3329,
    AuditCertificateEventType_EventId = 3330,
    AuditCertificateEventType_EventType = 3331,
    AuditCertificateEventType_SourceNode = 3332,
    AuditCertificateEventType_SourceName = 3333,
    AuditCertificateEventType_Time = 3334,
    AuditCertificateEventType_ReceiveTime = 3335,
    AuditCertificateEventType_LocalTime = 3336,
    AuditCertificateEventType_Message = 3337,
    AuditCertificateEventType_Severity = 3338,
    AuditCertificateEventType_ActionTimeStamp = 3339,
    AuditCertificateEventType_Status = 3340,
    AuditCertificateEventType_ServerId = 3341,
    AuditCertificateEventType_ClientAuditEntryId = 3342,
    AuditCertificateEventType_ClientUserId = 3343,
    AuditCertificateDataMismatchEventType_EventId = 3344,
    AuditCertificateDataMismatchEventType_EventType = 3345,
    AuditCertificateDataMismatchEventType_SourceNode = 3346,
    AuditCertificateDataMismatchEventType_SourceName = 3347,
    AuditCertificateDataMismatchEventType_Time = 3348,
    AuditCertificateDataMismatchEventType_ReceiveTime = 3349,
    AuditCertificateDataMismatchEventType_LocalTime = 3350,
    AuditCertificateDataMismatchEventType_Message = 3351,
    AuditCertificateDataMismatchEventType_Severity = 3352,
    AuditCertificateDataMismatchEventType_ActionTimeStamp = 3353,
    AuditCertificateDataMismatchEventType_Status = 3354,
    AuditCertificateDataMismatchEventType_ServerId = 3355,
    AuditCertificateDataMismatchEventType_ClientAuditEntryId = 3356,
    AuditCertificateDataMismatchEventType_ClientUserId = 3357,
    AuditCertificateDataMismatchEventType_Certificate = 3358,
    AuditCertificateExpiredEventType_EventId = 3359,
    AuditCertificateExpiredEventType_EventType = 3360,
    AuditCertificateExpiredEventType_SourceNode = 3361,
    AuditCertificateExpiredEventType_SourceName = 3362,
    AuditCertificateExpiredEventType_Time = 3363,
    AuditCertificateExpiredEventType_ReceiveTime = 3364,
    AuditCertificateExpiredEventType_LocalTime = 3365,
    AuditCertificateExpiredEventType_Message = 3366,
    AuditCertificateExpiredEventType_Severity = 3367,
    AuditCertificateExpiredEventType_ActionTimeStamp = 3368,
    AuditCertificateExpiredEventType_Status = 3369,
    AuditCertificateExpiredEventType_ServerId = 3370,
    AuditCertificateExpiredEventType_ClientAuditEntryId = 3371,
    AuditCertificateExpiredEventType_ClientUserId = 3372,
    AuditCertificateExpiredEventType_Certificate = 3373,
    AuditCertificateInvalidEventType_EventId = 3374,
    AuditCertificateInvalidEventType_EventType = 3375,
    AuditCertificateInvalidEventType_SourceNode = 3376,
    AuditCertificateInvalidEventType_SourceName = 3377,
    AuditCertificateInvalidEventType_Time = 3378,
    AuditCertificateInvalidEventType_ReceiveTime = 3379,
    AuditCertificateInvalidEventType_LocalTime = 3380,
    AuditCertificateInvalidEventType_Message = 3381,
    AuditCertificateInvalidEventType_Severity = 3382,
    AuditCertificateInvalidEventType_ActionTimeStamp = 3383,
    AuditCertificateInvalidEventType_Status = 3384,
    AuditCertificateInvalidEventType_ServerId = 3385,
    AuditCertificateInvalidEventType_ClientAuditEntryId = 3386,
    AuditCertificateInvalidEventType_ClientUserId = 3387,
    AuditCertificateInvalidEventType_Certificate = 3388,
    AuditCertificateUntrustedEventType_EventId = 3389,
    AuditCertificateUntrustedEventType_EventType = 3390,
    AuditCertificateUntrustedEventType_SourceNode = 3391,
    AuditCertificateUntrustedEventType_SourceName = 3392,
    AuditCertificateUntrustedEventType_Time = 3393,
    AuditCertificateUntrustedEventType_ReceiveTime = 3394,
    AuditCertificateUntrustedEventType_LocalTime = 3395,
    AuditCertificateUntrustedEventType_Message = 3396,
    AuditCertificateUntrustedEventType_Severity = 3397,
    AuditCertificateUntrustedEventType_ActionTimeStamp = 3398,
    AuditCertificateUntrustedEventType_Status = 3399,
    AuditCertificateUntrustedEventType_ServerId = 3400,
    AuditCertificateUntrustedEventType_ClientAuditEntryId = 3401,
    AuditCertificateUntrustedEventType_ClientUserId = 3402,
    AuditCertificateUntrustedEventType_Certificate = 3403,
    AuditCertificateRevokedEventType_EventId = 3404,
    AuditCertificateRevokedEventType_EventType = 3405,
    AuditCertificateRevokedEventType_SourceNode = 3406,
    AuditCertificateRevokedEventType_SourceName = 3407,
    AuditCertificateRevokedEventType_Time = 3408,
    AuditCertificateRevokedEventType_ReceiveTime = 3409,
    AuditCertificateRevokedEventType_LocalTime = 3410,
    AuditCertificateRevokedEventType_Message = 3411,
    AuditCertificateRevokedEventType_Severity = 3412,
    AuditCertificateRevokedEventType_ActionTimeStamp = 3413,
    AuditCertificateRevokedEventType_Status = 3414,
    AuditCertificateRevokedEventType_ServerId = 3415,
    AuditCertificateRevokedEventType_ClientAuditEntryId = 3416,
    AuditCertificateRevokedEventType_ClientUserId = 3417,
    AuditCertificateRevokedEventType_Certificate = 3418,
    AuditCertificateMismatchEventType_EventId = 3419,
    AuditCertificateMismatchEventType_EventType = 3420,
    AuditCertificateMismatchEventType_SourceNode = 3421,
    AuditCertificateMismatchEventType_SourceName = 3422,
    AuditCertificateMismatchEventType_Time = 3423,
    AuditCertificateMismatchEventType_ReceiveTime = 3424,
    AuditCertificateMismatchEventType_LocalTime = 3425,
    AuditCertificateMismatchEventType_Message = 3426,
    AuditCertificateMismatchEventType_Severity = 3427,
    AuditCertificateMismatchEventType_ActionTimeStamp = 3428,
    AuditCertificateMismatchEventType_Status = 3429,
    AuditCertificateMismatchEventType_ServerId = 3430,
    AuditCertificateMismatchEventType_ClientAuditEntryId = 3431,
    AuditCertificateMismatchEventType_ClientUserId = 3432,
    AuditCertificateMismatchEventType_Certificate = 3433,
    AuditNodeManagementEventType_EventId = 3434,
    AuditNodeManagementEventType_EventType = 3435,
    AuditNodeManagementEventType_SourceNode = 3436,
    AuditNodeManagementEventType_SourceName = 3437,
    AuditNodeManagementEventType_Time = 3438,
    AuditNodeManagementEventType_ReceiveTime = 3439,
    AuditNodeManagementEventType_LocalTime = 3440,
    AuditNodeManagementEventType_Message = 3441,
    AuditNodeManagementEventType_Severity = 3442,
    AuditNodeManagementEventType_ActionTimeStamp = 3443,
    AuditNodeManagementEventType_Status = 3444,
    AuditNodeManagementEventType_ServerId = 3445,
    AuditNodeManagementEventType_ClientAuditEntryId = 3446,
    AuditNodeManagementEventType_ClientUserId = 3447,
    AuditAddNodesEventType_EventId = 3448,
    AuditAddNodesEventType_EventType = 3449,
    AuditAddNodesEventType_SourceNode = 3450,
    AuditAddNodesEventType_SourceName = 3451,
    AuditAddNodesEventType_Time = 3452,
    AuditAddNodesEventType_ReceiveTime = 3453,
    AuditAddNodesEventType_LocalTime = 3454,
    AuditAddNodesEventType_Message = 3455,
    AuditAddNodesEventType_Severity = 3456,
    AuditAddNodesEventType_ActionTimeStamp = 3457,
    AuditAddNodesEventType_Status = 3458,
    AuditAddNodesEventType_ServerId = 3459,
    AuditAddNodesEventType_ClientAuditEntryId = 3460,
    AuditAddNodesEventType_ClientUserId = 3461,
    AuditDeleteNodesEventType_EventId = 3462,
    AuditDeleteNodesEventType_EventType = 3463,
    AuditDeleteNodesEventType_SourceNode = 3464,
    AuditDeleteNodesEventType_SourceName = 3465,
    AuditDeleteNodesEventType_Time = 3466,
    AuditDeleteNodesEventType_ReceiveTime = 3467,
    AuditDeleteNodesEventType_LocalTime = 3468,
    AuditDeleteNodesEventType_Message = 3469,
    AuditDeleteNodesEventType_Severity = 3470,
    AuditDeleteNodesEventType_ActionTimeStamp = 3471,
    AuditDeleteNodesEventType_Status = 3472,
    AuditDeleteNodesEventType_ServerId = 3473,
    AuditDeleteNodesEventType_ClientAuditEntryId = 3474,
    AuditDeleteNodesEventType_ClientUserId = 3475,
    AuditAddReferencesEventType_EventId = 3476,
    AuditAddReferencesEventType_EventType = 3477,
    AuditAddReferencesEventType_SourceNode = 3478,
    AuditAddReferencesEventType_SourceName = 3479,
    AuditAddReferencesEventType_Time = 3480,
    AuditAddReferencesEventType_ReceiveTime = 3481,
    AuditAddReferencesEventType_LocalTime = 3482,
    AuditAddReferencesEventType_Message = 3483,
    AuditAddReferencesEventType_Severity = 3484,
    AuditAddReferencesEventType_ActionTimeStamp = 3485,
    AuditAddReferencesEventType_Status = 3486,
    AuditAddReferencesEventType_ServerId = 3487,
    AuditAddReferencesEventType_ClientAuditEntryId = 3488,
    AuditAddReferencesEventType_ClientUserId = 3489,
    AuditDeleteReferencesEventType_EventId = 3490,
    AuditDeleteReferencesEventType_EventType = 3491,
    AuditDeleteReferencesEventType_SourceNode = 3492,
    AuditDeleteReferencesEventType_SourceName = 3493,
    AuditDeleteReferencesEventType_Time = 3494,
    AuditDeleteReferencesEventType_ReceiveTime = 3495,
    AuditDeleteReferencesEventType_LocalTime = 3496,
    AuditDeleteReferencesEventType_Message = 3497,
    AuditDeleteReferencesEventType_Severity = 3498,
    AuditDeleteReferencesEventType_ActionTimeStamp = 3499,
    AuditDeleteReferencesEventType_Status = 3500,
    AuditDeleteReferencesEventType_ServerId = 3501,
    AuditDeleteReferencesEventType_ClientAuditEntryId = 3502,
    AuditDeleteReferencesEventType_ClientUserId = 3503,
    AuditUpdateEventType_EventId = 3504,
    AuditUpdateEventType_EventType = 3505,
    AuditUpdateEventType_SourceNode = 3506,
    AuditUpdateEventType_SourceName = 3507,
    AuditUpdateEventType_Time = 3508,
    AuditUpdateEventType_ReceiveTime = 3509,
    AuditUpdateEventType_LocalTime = 3510,
    AuditUpdateEventType_Message = 3511,
    AuditUpdateEventType_Severity = 3512,
    AuditUpdateEventType_ActionTimeStamp = 3513,
    AuditUpdateEventType_Status = 3514,
    AuditUpdateEventType_ServerId = 3515,
    AuditUpdateEventType_ClientAuditEntryId = 3516,
    AuditUpdateEventType_ClientUserId = 3517,
    AuditWriteUpdateEventType_EventId = 3518,
    AuditWriteUpdateEventType_EventType = 3519,
    AuditWriteUpdateEventType_SourceNode = 3520,
    AuditWriteUpdateEventType_SourceName = 3521,
    AuditWriteUpdateEventType_Time = 3522,
    AuditWriteUpdateEventType_ReceiveTime = 3523,
    AuditWriteUpdateEventType_LocalTime = 3524,
    AuditWriteUpdateEventType_Message = 3525,
    AuditWriteUpdateEventType_Severity = 3526,
    AuditWriteUpdateEventType_ActionTimeStamp = 3527,
    AuditWriteUpdateEventType_Status = 3528,
    AuditWriteUpdateEventType_ServerId = 3529,
    AuditWriteUpdateEventType_ClientAuditEntryId = 3530,
    AuditWriteUpdateEventType_ClientUserId = 3531,
    AuditHistoryUpdateEventType_EventId = 3532,
    AuditHistoryUpdateEventType_EventType = 3533,
    AuditHistoryUpdateEventType_SourceNode = 3534,
    AuditHistoryUpdateEventType_SourceName = 3535,
    AuditHistoryUpdateEventType_Time = 3536,
    AuditHistoryUpdateEventType_ReceiveTime = 3537,
    AuditHistoryUpdateEventType_LocalTime = 3538,
    AuditHistoryUpdateEventType_Message = 3539,
    AuditHistoryUpdateEventType_Severity = 3540,
    AuditHistoryUpdateEventType_ActionTimeStamp = 3541,
    AuditHistoryUpdateEventType_Status = 3542,
    AuditHistoryUpdateEventType_ServerId = 3543,
    AuditHistoryUpdateEventType_ClientAuditEntryId = 3544,
    AuditHistoryUpdateEventType_ClientUserId = 3545,
    AuditHistoryEventUpdateEventType_EventId = 3546,
    AuditHistoryEventUpdateEventType_EventType = 3547,
    AuditHistoryEventUpdateEventType_SourceNode = 3548,
    AuditHistoryEventUpdateEventType_SourceName = 3549,
    AuditHistoryEventUpdateEventType_Time = 3550,
    AuditHistoryEventUpdateEventType_ReceiveTime = 3551,
    AuditHistoryEventUpdateEventType_LocalTime = 3552,
    AuditHistoryEventUpdateEventType_Message = 3553,
    AuditHistoryEventUpdateEventType_Severity = 3554,
    AuditHistoryEventUpdateEventType_ActionTimeStamp = 3555,
    AuditHistoryEventUpdateEventType_Status = 3556,
    AuditHistoryEventUpdateEventType_ServerId = 3557,
    AuditHistoryEventUpdateEventType_ClientAuditEntryId = 3558,
    AuditHistoryEventUpdateEventType_ClientUserId = 3559,
    AuditHistoryEventUpdateEventType_ParameterDataTypeId = 3560,
    AuditHistoryValueUpdateEventType_EventId = 3561,
    AuditHistoryValueUpdateEventType_EventType = 3562,
    AuditHistoryValueUpdateEventType_SourceNode = 3563,
    AuditHistoryValueUpdateEventType_SourceName = 3564,
    AuditHistoryValueUpdateEventType_Time = 3565,
    AuditHistoryValueUpdateEventType_ReceiveTime = 3566,
    AuditHistoryValueUpdateEventType_LocalTime = 3567,
    AuditHistoryValueUpdateEventType_Message = 3568,
    AuditHistoryValueUpdateEventType_Severity = 3569,
    AuditHistoryValueUpdateEventType_ActionTimeStamp = 3570,
    AuditHistoryValueUpdateEventType_Status = 3571,
    AuditHistoryValueUpdateEventType_ServerId = 3572,
    AuditHistoryValueUpdateEventType_ClientAuditEntryId = 3573,
    AuditHistoryValueUpdateEventType_ClientUserId = 3574,
    AuditHistoryValueUpdateEventType_ParameterDataTypeId = 3575,
    AuditHistoryDeleteEventType_EventId = 3576,
    AuditHistoryDeleteEventType_EventType = 3577,
    AuditHistoryDeleteEventType_SourceNode = 3578,
    AuditHistoryDeleteEventType_SourceName = 3579,
    AuditHistoryDeleteEventType_Time = 3580,
    AuditHistoryDeleteEventType_ReceiveTime = 3581,
    AuditHistoryDeleteEventType_LocalTime = 3582,
    AuditHistoryDeleteEventType_Message = 3583,
    AuditHistoryDeleteEventType_Severity = 3584,
    AuditHistoryDeleteEventType_ActionTimeStamp = 3585,
    AuditHistoryDeleteEventType_Status = 3586,
    AuditHistoryDeleteEventType_ServerId = 3587,
    AuditHistoryDeleteEventType_ClientAuditEntryId = 3588,
    AuditHistoryDeleteEventType_ClientUserId = 3589,
    AuditHistoryDeleteEventType_ParameterDataTypeId = 3590,
    AuditHistoryRawModifyDeleteEventType_EventId = 3591,
    AuditHistoryRawModifyDeleteEventType_EventType = 3592,
    AuditHistoryRawModifyDeleteEventType_SourceNode = 3593,
    AuditHistoryRawModifyDeleteEventType_SourceName = 3594,
    AuditHistoryRawModifyDeleteEventType_Time = 3595,
    AuditHistoryRawModifyDeleteEventType_ReceiveTime = 3596,
    AuditHistoryRawModifyDeleteEventType_LocalTime = 3597,
    AuditHistoryRawModifyDeleteEventType_Message = 3598,
    AuditHistoryRawModifyDeleteEventType_Severity = 3599,
    AuditHistoryRawModifyDeleteEventType_ActionTimeStamp = 3600,
    AuditHistoryRawModifyDeleteEventType_Status = 3601,
    AuditHistoryRawModifyDeleteEventType_ServerId = 3602,
    AuditHistoryRawModifyDeleteEventType_ClientAuditEntryId = 3603,
    AuditHistoryRawModifyDeleteEventType_ClientUserId = 3604,
    AuditHistoryRawModifyDeleteEventType_ParameterDataTypeId = 3605,
    AuditHistoryRawModifyDeleteEventType_UpdatedNode = 3606,
    AuditHistoryAtTimeDeleteEventType_EventId = 3607,
    AuditHistoryAtTimeDeleteEventType_EventType = 3608,
    AuditHistoryAtTimeDeleteEventType_SourceNode = 3609,
    AuditHistoryAtTimeDeleteEventType_SourceName = 3610,
    AuditHistoryAtTimeDeleteEventType_Time = 3611,
    AuditHistoryAtTimeDeleteEventType_ReceiveTime = 3612,
    AuditHistoryAtTimeDeleteEventType_LocalTime = 3613,
    AuditHistoryAtTimeDeleteEventType_Message = 3614,
    AuditHistoryAtTimeDeleteEventType_Severity = 3615,
    AuditHistoryAtTimeDeleteEventType_ActionTimeStamp = 3616,
    AuditHistoryAtTimeDeleteEventType_Status = 3617,
    AuditHistoryAtTimeDeleteEventType_ServerId = 3618,
    AuditHistoryAtTimeDeleteEventType_ClientAuditEntryId = 3619,
    AuditHistoryAtTimeDeleteEventType_ClientUserId = 3620,
    AuditHistoryAtTimeDeleteEventType_ParameterDataTypeId = 3621,
    AuditHistoryAtTimeDeleteEventType_UpdatedNode = 3622,
    AuditHistoryEventDeleteEventType_EventId = 3623,
    AuditHistoryEventDeleteEventType_EventType = 3624,
    AuditHistoryEventDeleteEventType_SourceNode = 3625,
    AuditHistoryEventDeleteEventType_SourceName = 3626,
    AuditHistoryEventDeleteEventType_Time = 3627,
    AuditHistoryEventDeleteEventType_ReceiveTime = 3628,
    AuditHistoryEventDeleteEventType_LocalTime = 3629,
    AuditHistoryEventDeleteEventType_Message = 3630,
    AuditHistoryEventDeleteEventType_Severity = 3631,
    AuditHistoryEventDeleteEventType_ActionTimeStamp = 3632,
    AuditHistoryEventDeleteEventType_Status = 3633,
    AuditHistoryEventDeleteEventType_ServerId = 3634,
    AuditHistoryEventDeleteEventType_ClientAuditEntryId = 3635,
    AuditHistoryEventDeleteEventType_ClientUserId = 3636,
    AuditHistoryEventDeleteEventType_ParameterDataTypeId = 3637,
    AuditHistoryEventDeleteEventType_UpdatedNode = 3638,
    AuditUpdateMethodEventType_EventId = 3639,
    AuditUpdateMethodEventType_EventType = 3640,
    AuditUpdateMethodEventType_SourceNode = 3641,
    AuditUpdateMethodEventType_SourceName = 3642,
    AuditUpdateMethodEventType_Time = 3643,
    AuditUpdateMethodEventType_ReceiveTime = 3644,
    AuditUpdateMethodEventType_LocalTime = 3645,
    AuditUpdateMethodEventType_Message = 3646,
    AuditUpdateMethodEventType_Severity = 3647,
    AuditUpdateMethodEventType_ActionTimeStamp = 3648,
    AuditUpdateMethodEventType_Status = 3649,
    AuditUpdateMethodEventType_ServerId = 3650,
    AuditUpdateMethodEventType_ClientAuditEntryId = 3651,
    AuditUpdateMethodEventType_ClientUserId = 3652,
    SystemEventType_EventId = 3653,
    SystemEventType_EventType = 3654,
    SystemEventType_SourceNode = 3655,
    SystemEventType_SourceName = 3656,
    SystemEventType_Time = 3657,
    SystemEventType_ReceiveTime = 3658,
    SystemEventType_LocalTime = 3659,
    SystemEventType_Message = 3660,
    SystemEventType_Severity = 3661,
    DeviceFailureEventType_EventId = 3662,
    DeviceFailureEventType_EventType = 3663,
    DeviceFailureEventType_SourceNode = 3664,
    DeviceFailureEventType_SourceName = 3665,
    DeviceFailureEventType_Time = 3666,
    DeviceFailureEventType_ReceiveTime = 3667,
    DeviceFailureEventType_LocalTime = 3668,
    DeviceFailureEventType_Message = 3669,
    DeviceFailureEventType_Severity = 3670,
    BaseModelChangeEventType_EventId = 3671,
    BaseModelChangeEventType_EventType = 3672,
    BaseModelChangeEventType_SourceNode = 3673,
    BaseModelChangeEventType_SourceName = 3674,
    BaseModelChangeEventType_Time = 3675,
    BaseModelChangeEventType_ReceiveTime = 3676,
    BaseModelChangeEventType_LocalTime = 3677,
    BaseModelChangeEventType_Message = 3678,
    BaseModelChangeEventType_Severity = 3679,
    GeneralModelChangeEventType_EventId = 3680,
    GeneralModelChangeEventType_EventType = 3681,
    GeneralModelChangeEventType_SourceNode = 3682,
    GeneralModelChangeEventType_SourceName = 3683,
    GeneralModelChangeEventType_Time = 3684,
    GeneralModelChangeEventType_ReceiveTime = 3685,
    GeneralModelChangeEventType_LocalTime = 3686,
    GeneralModelChangeEventType_Message = 3687,
    GeneralModelChangeEventType_Severity = 3688,
    SemanticChangeEventType_EventId = 3689,
    SemanticChangeEventType_EventType = 3690,
    SemanticChangeEventType_SourceNode = 3691,
    SemanticChangeEventType_SourceName = 3692,
    SemanticChangeEventType_Time = 3693,
    SemanticChangeEventType_ReceiveTime = 3694,
    SemanticChangeEventType_LocalTime = 3695,
    SemanticChangeEventType_Message = 3696,
    SemanticChangeEventType_Severity = 3697,
    ServerStatusType_BuildInfo_ProductUri = 3698,
    ServerStatusType_BuildInfo_ManufacturerName = 3699,
    ServerStatusType_BuildInfo_ProductName = 3700,
    ServerStatusType_BuildInfo_SoftwareVersion = 3701,
    ServerStatusType_BuildInfo_BuildNumber = 3702,
    ServerStatusType_BuildInfo_BuildDate = 3703,
    Server_ServerCapabilities_SoftwareCertificates = 3704,
    Server_ServerDiagnostics_ServerDiagnosticsSummary_RejectedSessionCount = 3705,
    Server_ServerDiagnostics_SessionsDiagnosticsSummary = 3706,
    Server_ServerDiagnostics_SessionsDiagnosticsSummary_SessionDiagnosticsArray = 3707,
    Server_ServerDiagnostics_SessionsDiagnosticsSummary_SessionSecurityDiagnosticsArray = 3708,
    Server_ServerRedundancy_RedundancySupport = 3709,
    FiniteStateVariableType_Name = 3714,
    FiniteStateVariableType_Number = 3715,
    FiniteStateVariableType_EffectiveDisplayName = 3716,
    FiniteTransitionVariableType_Name = 3717,
    FiniteTransitionVariableType_Number = 3718,
    FiniteTransitionVariableType_TransitionTime = 3719,
    StateMachineType_CurrentState_Id = 3720,
    StateMachineType_CurrentState_Name = 3721,
    StateMachineType_CurrentState_Number = 3722,
    StateMachineType_CurrentState_EffectiveDisplayName = 3723,
    StateMachineType_LastTransition_Id = 3724,
    StateMachineType_LastTransition_Name = 3725,
    StateMachineType_LastTransition_Number = 3726,
    StateMachineType_LastTransition_TransitionTime = 3727,
    FiniteStateMachineType_CurrentState_Id = 3728,
    FiniteStateMachineType_CurrentState_Name = 3729,
    FiniteStateMachineType_CurrentState_Number = 3730,
    FiniteStateMachineType_CurrentState_EffectiveDisplayName = 3731,
    FiniteStateMachineType_LastTransition_Id = 3732,
    FiniteStateMachineType_LastTransition_Name = 3733,
    FiniteStateMachineType_LastTransition_Number = 3734,
    FiniteStateMachineType_LastTransition_TransitionTime = 3735,
    InitialStateType_StateNumber = 3736,
    TransitionEventType_EventId = 3737,
    TransitionEventType_EventType = 3738,
    TransitionEventType_SourceNode = 3739,
    TransitionEventType_SourceName = 3740,
    TransitionEventType_Time = 3741,
    TransitionEventType_ReceiveTime = 3742,
    TransitionEventType_LocalTime = 3743,
    TransitionEventType_Message = 3744,
    TransitionEventType_Severity = 3745,
    TransitionEventType_FromState_Id = 3746,
    TransitionEventType_FromState_Name = 3747,
    TransitionEventType_FromState_Number = 3748,
    TransitionEventType_FromState_EffectiveDisplayName = 3749,
    TransitionEventType_ToState_Id = 3750,
    TransitionEventType_ToState_Name = 3751,
    TransitionEventType_ToState_Number = 3752,
    TransitionEventType_ToState_EffectiveDisplayName = 3753,
    TransitionEventType_Transition_Id = 3754,
    TransitionEventType_Transition_Name = 3755,
    TransitionEventType_Transition_Number = 3756,
    TransitionEventType_Transition_TransitionTime = 3757,
    AuditUpdateStateEventType_EventId = 3758,
    AuditUpdateStateEventType_EventType = 3759,
    AuditUpdateStateEventType_SourceNode = 3760,
    AuditUpdateStateEventType_SourceName = 3761,
    AuditUpdateStateEventType_Time = 3762,
    AuditUpdateStateEventType_ReceiveTime = 3763,
    AuditUpdateStateEventType_LocalTime = 3764,
    AuditUpdateStateEventType_Message = 3765,
    AuditUpdateStateEventType_Severity = 3766,
    AuditUpdateStateEventType_ActionTimeStamp = 3767,
    AuditUpdateStateEventType_Status = 3768,
    AuditUpdateStateEventType_ServerId = 3769,
    AuditUpdateStateEventType_ClientAuditEntryId = 3770,
    AuditUpdateStateEventType_ClientUserId = 3771,
    AuditUpdateStateEventType_MethodId = 3772,
    AuditUpdateStateEventType_InputArguments = 3773,
    AnalogItemType_Definition = 3774,
    AnalogItemType_ValuePrecision = 3775,
    DiscreteItemType_Definition = 3776,
    DiscreteItemType_ValuePrecision = 3777,
    TwoStateDiscreteType_Definition = 3778,
    TwoStateDiscreteType_ValuePrecision = 3779,
    MultiStateDiscreteType_Definition = 3780,
    MultiStateDiscreteType_ValuePrecision = 3781,
    ProgramTransitionEventType_EventId = 3782,
    ProgramTransitionEventType_EventType = 3783,
    ProgramTransitionEventType_SourceNode = 3784,
    ProgramTransitionEventType_SourceName = 3785,
    ProgramTransitionEventType_Time = 3786,
    ProgramTransitionEventType_ReceiveTime = 3787,
    ProgramTransitionEventType_LocalTime = 3788,
    ProgramTransitionEventType_Message = 3789,
    ProgramTransitionEventType_Severity = 3790,
    ProgramTransitionEventType_FromState = 3791,
    ProgramTransitionEventType_FromState_Id = 3792,
    ProgramTransitionEventType_FromState_Name = 3793,
    ProgramTransitionEventType_FromState_Number = 3794,
    ProgramTransitionEventType_FromState_EffectiveDisplayName = 3795,
    ProgramTransitionEventType_ToState = 3796,
    ProgramTransitionEventType_ToState_Id = 3797,
    ProgramTransitionEventType_ToState_Name = 3798,
    ProgramTransitionEventType_ToState_Number = 3799,
    ProgramTransitionEventType_ToState_EffectiveDisplayName = 3800,
    ProgramTransitionEventType_Transition = 3801,
    ProgramTransitionEventType_Transition_Id = 3802,
    ProgramTransitionEventType_Transition_Name = 3803,
    ProgramTransitionEventType_Transition_Number = 3804,
    ProgramTransitionEventType_Transition_TransitionTime = 3805,
    ProgramTransitionAuditEventType = 3806,
    ProgramTransitionAuditEventType_EventId = 3807,
    ProgramTransitionAuditEventType_EventType = 3808,
    ProgramTransitionAuditEventType_SourceNode = 3809,
    ProgramTransitionAuditEventType_SourceName = 3810,
    ProgramTransitionAuditEventType_Time = 3811,
    ProgramTransitionAuditEventType_ReceiveTime = 3812,
    ProgramTransitionAuditEventType_LocalTime = 3813,
    ProgramTransitionAuditEventType_Message = 3814,
    ProgramTransitionAuditEventType_Severity = 3815,
    ProgramTransitionAuditEventType_ActionTimeStamp = 3816,
    ProgramTransitionAuditEventType_Status = 3817,
    ProgramTransitionAuditEventType_ServerId = 3818,
    ProgramTransitionAuditEventType_ClientAuditEntryId = 3819,
    ProgramTransitionAuditEventType_ClientUserId = 3820,
    ProgramTransitionAuditEventType_MethodId = 3821,
    ProgramTransitionAuditEventType_InputArguments = 3822,
    ProgramTransitionAuditEventType_OldStateId = 3823,
    ProgramTransitionAuditEventType_NewStateId = 3824,
    ProgramTransitionAuditEventType_Transition = 3825,
    ProgramTransitionAuditEventType_Transition_Id = 3826,
    ProgramTransitionAuditEventType_Transition_Name = 3827,
    ProgramTransitionAuditEventType_Transition_Number = 3828,
    ProgramTransitionAuditEventType_Transition_TransitionTime = 3829,
    ProgramStateMachineType_CurrentState = 3830,
    ProgramStateMachineType_CurrentState_Id = 3831,
    ProgramStateMachineType_CurrentState_Name = 3832,
    ProgramStateMachineType_CurrentState_Number = 3833,
    ProgramStateMachineType_CurrentState_EffectiveDisplayName = 3834,
    ProgramStateMachineType_LastTransition = 3835,
    ProgramStateMachineType_LastTransition_Id = 3836,
    ProgramStateMachineType_LastTransition_Name = 3837,
    ProgramStateMachineType_LastTransition_Number = 3838,
    ProgramStateMachineType_LastTransition_TransitionTime = 3839,
    ProgramStateMachineType_ProgramDiagnostic_CreateSessionId = 3840,
    ProgramStateMachineType_ProgramDiagnostic_CreateClientName = 3841,
    ProgramStateMachineType_ProgramDiagnostic_InvocationCreationTime = 3842,
    ProgramStateMachineType_ProgramDiagnostic_LastTransitionTime = 3843,
    ProgramStateMachineType_ProgramDiagnostic_LastMethodCall = 3844,
    ProgramStateMachineType_ProgramDiagnostic_LastMethodSessionId = 3845,
    ProgramStateMachineType_ProgramDiagnostic_LastMethodInputArguments = 3846,
    ProgramStateMachineType_ProgramDiagnostic_LastMethodOutputArguments = 3847,
    ProgramStateMachineType_ProgramDiagnostic_LastMethodCallTime = 3848,
    ProgramStateMachineType_ProgramDiagnostic_LastMethodReturnStatus = 3849,
    ProgramStateMachineType_FinalResultData = 3850,
    AddCommentMethodType = 3863,
    AddCommentMethodType_InputArguments = 3864,
    ConditionType_EventId = 3865,
    ConditionType_EventType = 3866,
    ConditionType_SourceNode = 3867,
    ConditionType_SourceName = 3868,
    ConditionType_Time = 3869,
    ConditionType_ReceiveTime = 3870,
    ConditionType_LocalTime = 3871,
    ConditionType_Message = 3872,
    ConditionType_Severity = 3873,
    ConditionType_Retain = 3874,
    ConditionType_ConditionRefresh = 3875,
    ConditionType_ConditionRefresh_InputArguments = 3876,
    RefreshStartEventType_EventId = 3969,
    RefreshStartEventType_EventType = 3970,
    RefreshStartEventType_SourceNode = 3971,
    RefreshStartEventType_SourceName = 3972,
    RefreshStartEventType_Time = 3973,
    RefreshStartEventType_ReceiveTime = 3974,
    RefreshStartEventType_LocalTime = 3975,
    RefreshStartEventType_Message = 3976,
    RefreshStartEventType_Severity = 3977,
    RefreshEndEventType_EventId = 3978,
    RefreshEndEventType_EventType = 3979,
    RefreshEndEventType_SourceNode = 3980,
    RefreshEndEventType_SourceName = 3981,
    RefreshEndEventType_Time = 3982,
    RefreshEndEventType_ReceiveTime = 3983,
    RefreshEndEventType_LocalTime = 3984,
    RefreshEndEventType_Message = 3985,
    RefreshEndEventType_Severity = 3986,
    RefreshRequiredEventType_EventId = 3987,
    RefreshRequiredEventType_EventType = 3988,
    RefreshRequiredEventType_SourceNode = 3989,
    RefreshRequiredEventType_SourceName = 3990,
    RefreshRequiredEventType_Time = 3991,
    RefreshRequiredEventType_ReceiveTime = 3992,
    RefreshRequiredEventType_LocalTime = 3993,
    RefreshRequiredEventType_Message = 3994,
    RefreshRequiredEventType_Severity = 3995,
    AuditConditionEventType_EventId = 3996,
    AuditConditionEventType_EventType = 3997,
    AuditConditionEventType_SourceNode = 3998,
    AuditConditionEventType_SourceName = 3999,
    AuditConditionEventType_Time = 4000,
    AuditConditionEventType_ReceiveTime = 4001,
    AuditConditionEventType_LocalTime = 4002,
    AuditConditionEventType_Message = 4003,
    AuditConditionEventType_Severity = 4004,
    AuditConditionEventType_ActionTimeStamp = 4005,
    AuditConditionEventType_Status = 4006,
    AuditConditionEventType_ServerId = 4007,
    AuditConditionEventType_ClientAuditEntryId = 4008,
    AuditConditionEventType_ClientUserId = 4009,
    AuditConditionEventType_MethodId = 4010,
    AuditConditionEventType_InputArguments = 4011,
    AuditConditionEnableEventType_EventId = 4106,
    AuditConditionEnableEventType_EventType = 4107,
    AuditConditionEnableEventType_SourceNode = 4108,
    AuditConditionEnableEventType_SourceName = 4109,
    AuditConditionEnableEventType_Time = 4110,
    AuditConditionEnableEventType_ReceiveTime = 4111,
    AuditConditionEnableEventType_LocalTime = 4112,
    AuditConditionEnableEventType_Message = 4113,
    AuditConditionEnableEventType_Severity = 4114,
    AuditConditionEnableEventType_ActionTimeStamp = 4115,
    AuditConditionEnableEventType_Status = 4116,
    AuditConditionEnableEventType_ServerId = 4117,
    AuditConditionEnableEventType_ClientAuditEntryId = 4118,
    AuditConditionEnableEventType_ClientUserId = 4119,
    AuditConditionEnableEventType_MethodId = 4120,
    AuditConditionEnableEventType_InputArguments = 4121,
    AuditConditionCommentEventType_EventId = 4170,
    AuditConditionCommentEventType_EventType = 4171,
    AuditConditionCommentEventType_SourceNode = 4172,
    AuditConditionCommentEventType_SourceName = 4173,
    AuditConditionCommentEventType_Time = 4174,
    AuditConditionCommentEventType_ReceiveTime = 4175,
    AuditConditionCommentEventType_LocalTime = 4176,
    AuditConditionCommentEventType_Message = 4177,
    AuditConditionCommentEventType_Severity = 4178,
    AuditConditionCommentEventType_ActionTimeStamp = 4179,
    AuditConditionCommentEventType_Status = 4180,
    AuditConditionCommentEventType_ServerId = 4181,
    AuditConditionCommentEventType_ClientAuditEntryId = 4182,
    AuditConditionCommentEventType_ClientUserId = 4183,
    AuditConditionCommentEventType_MethodId = 4184,
    AuditConditionCommentEventType_InputArguments = 4185,
    DialogConditionType_EventId = 4188,
    DialogConditionType_EventType = 4189,
    DialogConditionType_SourceNode = 4190,
    DialogConditionType_SourceName = 4191,
    DialogConditionType_Time = 4192,
    DialogConditionType_ReceiveTime = 4193,
    DialogConditionType_LocalTime = 4194,
    DialogConditionType_Message = 4195,
    DialogConditionType_Severity = 4196,
    DialogConditionType_Retain = 4197,
    DialogConditionType_ConditionRefresh = 4198,
    DialogConditionType_ConditionRefresh_InputArguments = 4199,
    AcknowledgeableConditionType_EventId = 5113,
    AcknowledgeableConditionType_EventType = 5114,
    AcknowledgeableConditionType_SourceNode = 5115,
    AcknowledgeableConditionType_SourceName = 5116,
    AcknowledgeableConditionType_Time = 5117,
    AcknowledgeableConditionType_ReceiveTime = 5118,
    AcknowledgeableConditionType_LocalTime = 5119,
    AcknowledgeableConditionType_Message = 5120,
    AcknowledgeableConditionType_Severity = 5121,
    AcknowledgeableConditionType_Retain = 5122,
    AcknowledgeableConditionType_ConditionRefresh = 5123,
    AcknowledgeableConditionType_ConditionRefresh_InputArguments = 5124,
    AlarmConditionType_EventId = 5540,
    AlarmConditionType_EventType = 5541,
    AlarmConditionType_SourceNode = 5542,
    AlarmConditionType_SourceName = 5543,
    AlarmConditionType_Time = 5544,
    AlarmConditionType_ReceiveTime = 5545,
    AlarmConditionType_LocalTime = 5546,
    AlarmConditionType_Message = 5547,
    AlarmConditionType_Severity = 5548,
    AlarmConditionType_Retain = 5549,
    AlarmConditionType_ConditionRefresh = 5550,
    AlarmConditionType_ConditionRefresh_InputArguments = 5551,
    ShelvedStateMachineType_CurrentState = 6088,
    ShelvedStateMachineType_CurrentState_Id = 6089,
    ShelvedStateMachineType_CurrentState_Name = 6090,
    ShelvedStateMachineType_CurrentState_Number = 6091,
    ShelvedStateMachineType_CurrentState_EffectiveDisplayName = 6092,
    ShelvedStateMachineType_LastTransition = 6093,
    ShelvedStateMachineType_LastTransition_Id = 6094,
    ShelvedStateMachineType_LastTransition_Name = 6095,
    ShelvedStateMachineType_LastTransition_Number = 6096,
    ShelvedStateMachineType_LastTransition_TransitionTime = 6097,
    ShelvedStateMachineType_Unshelved_StateNumber = 6098,
    ShelvedStateMachineType_TimedShelved_StateNumber = 6100,
    ShelvedStateMachineType_OneShotShelved_StateNumber = 6101,
    TimedShelveMethodType = 6102,
    TimedShelveMethodType_InputArguments = 6103,
    LimitAlarmType_EventId = 6116,
    LimitAlarmType_EventType = 6117,
    LimitAlarmType_SourceNode = 6118,
    LimitAlarmType_SourceName = 6119,
    LimitAlarmType_Time = 6120,
    LimitAlarmType_ReceiveTime = 6121,
    LimitAlarmType_LocalTime = 6122,
    LimitAlarmType_Message = 6123,
    LimitAlarmType_Severity = 6124,
    LimitAlarmType_Retain = 6125,
    LimitAlarmType_ConditionRefresh = 6126,
    LimitAlarmType_ConditionRefresh_InputArguments = 6127,
    IdType_EnumStrings = 7591,
    EnumValueType = 7594,
    MessageSecurityMode_EnumStrings = 7595,
    UserTokenType_EnumStrings = 7596,
    ApplicationType_EnumStrings = 7597,
    SecurityTokenRequestType_EnumStrings = 7598,
    BrowseDirection_EnumStrings = 7603,
    FilterOperator_EnumStrings = 7605,
    TimestampsToReturn_EnumStrings = 7606,
    MonitoringMode_EnumStrings = 7608,
    DataChangeTrigger_EnumStrings = 7609,
    DeadbandType_EnumStrings = 7610,
    RedundancySupport_EnumStrings = 7611,
    ServerState_EnumStrings = 7612,
    ExceptionDeviationFormat_EnumStrings = 7614,
    EnumValueType_Encoding_DefaultXml = 7616,
    OpcUa_BinarySchema = 7617,
    OpcUa_BinarySchema_DataTypeVersion = 7618,
    OpcUa_BinarySchema_NamespaceUri = 7619,
    OpcUa_BinarySchema_Argument = 7650,
    OpcUa_BinarySchema_Argument_DataTypeVersion = 7651,
    OpcUa_BinarySchema_Argument_DictionaryFragment = 7652,
    OpcUa_BinarySchema_EnumValueType = 7656,
    OpcUa_BinarySchema_EnumValueType_DataTypeVersion = 7657,
    OpcUa_BinarySchema_EnumValueType_DictionaryFragment = 7658,
    OpcUa_BinarySchema_StatusResult = 7659,
    OpcUa_BinarySchema_StatusResult_DataTypeVersion = 7660,
    OpcUa_BinarySchema_StatusResult_DictionaryFragment = 7661,
    OpcUa_BinarySchema_UserTokenPolicy = 7662,
    OpcUa_BinarySchema_UserTokenPolicy_DataTypeVersion = 7663,
    OpcUa_BinarySchema_UserTokenPolicy_DictionaryFragment = 7664,
    OpcUa_BinarySchema_ApplicationDescription = 7665,
    OpcUa_BinarySchema_ApplicationDescription_DataTypeVersion = 7666,
    OpcUa_BinarySchema_ApplicationDescription_DictionaryFragment = 7667,
    OpcUa_BinarySchema_EndpointDescription = 7668,
    OpcUa_BinarySchema_EndpointDescription_DataTypeVersion = 7669,
    OpcUa_BinarySchema_EndpointDescription_DictionaryFragment = 7670,
    OpcUa_BinarySchema_UserIdentityToken = 7671,
    OpcUa_BinarySchema_UserIdentityToken_DataTypeVersion = 7672,
    OpcUa_BinarySchema_UserIdentityToken_DictionaryFragment = 7673,
    OpcUa_BinarySchema_AnonymousIdentityToken = 7674,
    OpcUa_BinarySchema_AnonymousIdentityToken_DataTypeVersion = 7675,
    OpcUa_BinarySchema_AnonymousIdentityToken_DictionaryFragment = 7676,
    OpcUa_BinarySchema_UserNameIdentityToken = 7677,
    OpcUa_BinarySchema_UserNameIdentityToken_DataTypeVersion = 7678,
    OpcUa_BinarySchema_UserNameIdentityToken_DictionaryFragment = 7679,
    OpcUa_BinarySchema_X509IdentityToken = 7680,
    OpcUa_BinarySchema_X509IdentityToken_DataTypeVersion = 7681,
    OpcUa_BinarySchema_X509IdentityToken_DictionaryFragment = 7682,
    OpcUa_BinarySchema_IssuedIdentityToken = 7683,
    OpcUa_BinarySchema_IssuedIdentityToken_DataTypeVersion = 7684,
    OpcUa_BinarySchema_IssuedIdentityToken_DictionaryFragment = 7685,
    OpcUa_BinarySchema_EndpointConfiguration = 7686,
    OpcUa_BinarySchema_EndpointConfiguration_DataTypeVersion = 7687,
    OpcUa_BinarySchema_EndpointConfiguration_DictionaryFragment = 7688,
    OpcUa_BinarySchema_BuildInfo = 7692,
    OpcUa_BinarySchema_BuildInfo_DataTypeVersion = 7693,
    OpcUa_BinarySchema_BuildInfo_DictionaryFragment = 7694,
    OpcUa_BinarySchema_SignedSoftwareCertificate = 7698,
    OpcUa_BinarySchema_SignedSoftwareCertificate_DataTypeVersion = 7699,
    OpcUa_BinarySchema_SignedSoftwareCertificate_DictionaryFragment = 7700,
    OpcUa_BinarySchema_AddNodesItem = 7728,
    OpcUa_BinarySchema_AddNodesItem_DataTypeVersion = 7729,
    OpcUa_BinarySchema_AddNodesItem_DictionaryFragment = 7730,
    OpcUa_BinarySchema_AddReferencesItem = 7731,
    OpcUa_BinarySchema_AddReferencesItem_DataTypeVersion = 7732,
    OpcUa_BinarySchema_AddReferencesItem_DictionaryFragment = 7733,
    OpcUa_BinarySchema_DeleteNodesItem = 7734,
    OpcUa_BinarySchema_DeleteNodesItem_DataTypeVersion = 7735,
    OpcUa_BinarySchema_DeleteNodesItem_DictionaryFragment = 7736,
    OpcUa_BinarySchema_DeleteReferencesItem = 7737,
    OpcUa_BinarySchema_DeleteReferencesItem_DataTypeVersion = 7738,
    OpcUa_BinarySchema_DeleteReferencesItem_DictionaryFragment = 7739,
    OpcUa_BinarySchema_RegisteredServer = 7782,
    OpcUa_BinarySchema_RegisteredServer_DataTypeVersion = 7783,
    OpcUa_BinarySchema_RegisteredServer_DictionaryFragment = 7784,
    OpcUa_BinarySchema_ContentFilterElement = 7929,
    OpcUa_BinarySchema_ContentFilterElement_DataTypeVersion = 7930,
    OpcUa_BinarySchema_ContentFilterElement_DictionaryFragment = 7931,
    OpcUa_BinarySchema_ContentFilter = 7932,
    OpcUa_BinarySchema_ContentFilter_DataTypeVersion = 7933,
    OpcUa_BinarySchema_ContentFilter_DictionaryFragment = 7934,
    OpcUa_BinarySchema_FilterOperand = 7935,
    OpcUa_BinarySchema_FilterOperand_DataTypeVersion = 7936,
    OpcUa_BinarySchema_FilterOperand_DictionaryFragment = 7937,
    OpcUa_BinarySchema_ElementOperand = 7938,
    OpcUa_BinarySchema_ElementOperand_DataTypeVersion = 7939,
    OpcUa_BinarySchema_ElementOperand_DictionaryFragment = 7940,
    OpcUa_BinarySchema_LiteralOperand = 7941,
    OpcUa_BinarySchema_LiteralOperand_DataTypeVersion = 7942,
    OpcUa_BinarySchema_LiteralOperand_DictionaryFragment = 7943,
    OpcUa_BinarySchema_AttributeOperand = 7944,
    OpcUa_BinarySchema_AttributeOperand_DataTypeVersion = 7945,
    OpcUa_BinarySchema_AttributeOperand_DictionaryFragment = 7946,
    OpcUa_BinarySchema_SimpleAttributeOperand = 7947,
    OpcUa_BinarySchema_SimpleAttributeOperand_DataTypeVersion = 7948,
    OpcUa_BinarySchema_SimpleAttributeOperand_DictionaryFragment = 7949,
    OpcUa_BinarySchema_HistoryEvent = 8004,
    OpcUa_BinarySchema_HistoryEvent_DataTypeVersion = 8005,
    OpcUa_BinarySchema_HistoryEvent_DictionaryFragment = 8006,
    OpcUa_BinarySchema_MonitoringFilter = 8067,
    OpcUa_BinarySchema_MonitoringFilter_DataTypeVersion = 8068,
    OpcUa_BinarySchema_MonitoringFilter_DictionaryFragment = 8069,
    OpcUa_BinarySchema_EventFilter = 8073,
    OpcUa_BinarySchema_EventFilter_DataTypeVersion = 8074,
    OpcUa_BinarySchema_EventFilter_DictionaryFragment = 8075,
    OpcUa_BinarySchema_AggregateConfiguration = 8076,
    OpcUa_BinarySchema_AggregateConfiguration_DataTypeVersion = 8077,
    OpcUa_BinarySchema_AggregateConfiguration_DictionaryFragment = 8078,
    OpcUa_BinarySchema_HistoryEventFieldList = 8172,
    OpcUa_BinarySchema_HistoryEventFieldList_DataTypeVersion = 8173,
    OpcUa_BinarySchema_HistoryEventFieldList_DictionaryFragment = 8174,
    OpcUa_BinarySchema_RedundantServerDataType = 8208,
    OpcUa_BinarySchema_RedundantServerDataType_DataTypeVersion = 8209,
    OpcUa_BinarySchema_RedundantServerDataType_DictionaryFragment = 8210,
    OpcUa_BinarySchema_SamplingIntervalDiagnosticsDataType = 8211,
    OpcUa_BinarySchema_SamplingIntervalDiagnosticsDataType_DataTypeVersion = 8212,
    OpcUa_BinarySchema_SamplingIntervalDiagnosticsDataType_DictionaryFragment = 8213,
    OpcUa_BinarySchema_ServerDiagnosticsSummaryDataType = 8214,
    OpcUa_BinarySchema_ServerDiagnosticsSummaryDataType_DataTypeVersion = 8215,
    OpcUa_BinarySchema_ServerDiagnosticsSummaryDataType_DictionaryFragment = 8216,
    OpcUa_BinarySchema_ServerStatusDataType = 8217,
    OpcUa_BinarySchema_ServerStatusDataType_DataTypeVersion = 8218,
    OpcUa_BinarySchema_ServerStatusDataType_DictionaryFragment = 8219,
    OpcUa_BinarySchema_SessionDiagnosticsDataType = 8220,
    OpcUa_BinarySchema_SessionDiagnosticsDataType_DataTypeVersion = 8221,
    OpcUa_BinarySchema_SessionDiagnosticsDataType_DictionaryFragment = 8222,
    OpcUa_BinarySchema_SessionSecurityDiagnosticsDataType = 8223,
    OpcUa_BinarySchema_SessionSecurityDiagnosticsDataType_DataTypeVersion = 8224,
    OpcUa_BinarySchema_SessionSecurityDiagnosticsDataType_DictionaryFragment = 8225,
    OpcUa_BinarySchema_ServiceCounterDataType = 8226,
    OpcUa_BinarySchema_ServiceCounterDataType_DataTypeVersion = 8227,
    OpcUa_BinarySchema_ServiceCounterDataType_DictionaryFragment = 8228,
    OpcUa_BinarySchema_SubscriptionDiagnosticsDataType = 8229,
    OpcUa_BinarySchema_SubscriptionDiagnosticsDataType_DataTypeVersion = 8230,
    OpcUa_BinarySchema_SubscriptionDiagnosticsDataType_DictionaryFragment = 8231,
    OpcUa_BinarySchema_ModelChangeStructureDataType = 8232,
    OpcUa_BinarySchema_ModelChangeStructureDataType_DataTypeVersion = 8233,
    OpcUa_BinarySchema_ModelChangeStructureDataType_DictionaryFragment = 8234,
    OpcUa_BinarySchema_SemanticChangeStructureDataType = 8235,
    OpcUa_BinarySchema_SemanticChangeStructureDataType_DataTypeVersion = 8236,
    OpcUa_BinarySchema_SemanticChangeStructureDataType_DictionaryFragment = 8237,
    OpcUa_BinarySchema_Range = 8238,
    OpcUa_BinarySchema_Range_DataTypeVersion = 8239,
    OpcUa_BinarySchema_Range_DictionaryFragment = 8240,
    OpcUa_BinarySchema_EUInformation = 8241,
    OpcUa_BinarySchema_EUInformation_DataTypeVersion = 8242,
    OpcUa_BinarySchema_EUInformation_DictionaryFragment = 8243,
    OpcUa_BinarySchema_Annotation = 8244,
    OpcUa_BinarySchema_Annotation_DataTypeVersion = 8245,
    OpcUa_BinarySchema_Annotation_DictionaryFragment = 8246,
    OpcUa_BinarySchema_ProgramDiagnosticDataType = 8247,
    OpcUa_BinarySchema_ProgramDiagnosticDataType_DataTypeVersion = 8248,
    OpcUa_BinarySchema_ProgramDiagnosticDataType_DictionaryFragment = 8249,
    EnumValueType_Encoding_DefaultBinary = 8251,
    OpcUa_XmlSchema = 8252,
    OpcUa_XmlSchema_DataTypeVersion = 8253,
    OpcUa_XmlSchema_NamespaceUri = 8254,
    OpcUa_XmlSchema_Argument = 8285,
    OpcUa_XmlSchema_Argument_DataTypeVersion = 8286,
    OpcUa_XmlSchema_Argument_DictionaryFragment = 8287,
    OpcUa_XmlSchema_EnumValueType = 8291,
    OpcUa_XmlSchema_EnumValueType_DataTypeVersion = 8292,
    OpcUa_XmlSchema_EnumValueType_DictionaryFragment = 8293,
    OpcUa_XmlSchema_StatusResult = 8294,
    OpcUa_XmlSchema_StatusResult_DataTypeVersion = 8295,
    OpcUa_XmlSchema_StatusResult_DictionaryFragment = 8296,
    OpcUa_XmlSchema_UserTokenPolicy = 8297,
    OpcUa_XmlSchema_UserTokenPolicy_DataTypeVersion = 8298,
    OpcUa_XmlSchema_UserTokenPolicy_DictionaryFragment = 8299,
    OpcUa_XmlSchema_ApplicationDescription = 8300,
    OpcUa_XmlSchema_ApplicationDescription_DataTypeVersion = 8301,
    OpcUa_XmlSchema_ApplicationDescription_DictionaryFragment = 8302,
    OpcUa_XmlSchema_EndpointDescription = 8303,
    OpcUa_XmlSchema_EndpointDescription_DataTypeVersion = 8304,
    OpcUa_XmlSchema_EndpointDescription_DictionaryFragment = 8305,
    OpcUa_XmlSchema_UserIdentityToken = 8306,
    OpcUa_XmlSchema_UserIdentityToken_DataTypeVersion = 8307,
    OpcUa_XmlSchema_UserIdentityToken_DictionaryFragment = 8308,
    OpcUa_XmlSchema_AnonymousIdentityToken = 8309,
    OpcUa_XmlSchema_AnonymousIdentityToken_DataTypeVersion = 8310,
    OpcUa_XmlSchema_AnonymousIdentityToken_DictionaryFragment = 8311,
    OpcUa_XmlSchema_UserNameIdentityToken = 8312,
    OpcUa_XmlSchema_UserNameIdentityToken_DataTypeVersion = 8313,
    OpcUa_XmlSchema_UserNameIdentityToken_DictionaryFragment = 8314,
    OpcUa_XmlSchema_X509IdentityToken = 8315,
    OpcUa_XmlSchema_X509IdentityToken_DataTypeVersion = 8316,
    OpcUa_XmlSchema_X509IdentityToken_DictionaryFragment = 8317,
    OpcUa_XmlSchema_IssuedIdentityToken = 8318,
    OpcUa_XmlSchema_IssuedIdentityToken_DataTypeVersion = 8319,
    OpcUa_XmlSchema_IssuedIdentityToken_DictionaryFragment = 8320,
    OpcUa_XmlSchema_EndpointConfiguration = 8321,
    OpcUa_XmlSchema_EndpointConfiguration_DataTypeVersion = 8322,
    OpcUa_XmlSchema_EndpointConfiguration_DictionaryFragment = 8323,
    OpcUa_XmlSchema_BuildInfo = 8327,
    OpcUa_XmlSchema_BuildInfo_DataTypeVersion = 8328,
    OpcUa_XmlSchema_BuildInfo_DictionaryFragment = 8329,
    OpcUa_XmlSchema_SignedSoftwareCertificate = 8333,
    OpcUa_XmlSchema_SignedSoftwareCertificate_DataTypeVersion = 8334,
    OpcUa_XmlSchema_SignedSoftwareCertificate_DictionaryFragment = 8335,
    OpcUa_XmlSchema_AddNodesItem = 8363,
    OpcUa_XmlSchema_AddNodesItem_DataTypeVersion = 8364,
    OpcUa_XmlSchema_AddNodesItem_DictionaryFragment = 8365,
    OpcUa_XmlSchema_AddReferencesItem = 8366,
    OpcUa_XmlSchema_AddReferencesItem_DataTypeVersion = 8367,
    OpcUa_XmlSchema_AddReferencesItem_DictionaryFragment = 8368,
    OpcUa_XmlSchema_DeleteNodesItem = 8369,
    OpcUa_XmlSchema_DeleteNodesItem_DataTypeVersion = 8370,
    OpcUa_XmlSchema_DeleteNodesItem_DictionaryFragment = 8371,
    OpcUa_XmlSchema_DeleteReferencesItem = 8372,
    OpcUa_XmlSchema_DeleteReferencesItem_DataTypeVersion = 8373,
    OpcUa_XmlSchema_DeleteReferencesItem_DictionaryFragment = 8374,
    OpcUa_XmlSchema_RegisteredServer = 8417,
    OpcUa_XmlSchema_RegisteredServer_DataTypeVersion = 8418,
    OpcUa_XmlSchema_RegisteredServer_DictionaryFragment = 8419,
    OpcUa_XmlSchema_ContentFilterElement = 8564,
    OpcUa_XmlSchema_ContentFilterElement_DataTypeVersion = 8565,
    OpcUa_XmlSchema_ContentFilterElement_DictionaryFragment = 8566,
    OpcUa_XmlSchema_ContentFilter = 8567,
    OpcUa_XmlSchema_ContentFilter_DataTypeVersion = 8568,
    OpcUa_XmlSchema_ContentFilter_DictionaryFragment = 8569,
    OpcUa_XmlSchema_FilterOperand = 8570,
    OpcUa_XmlSchema_FilterOperand_DataTypeVersion = 8571,
    OpcUa_XmlSchema_FilterOperand_DictionaryFragment = 8572,
    OpcUa_XmlSchema_ElementOperand = 8573,
    OpcUa_XmlSchema_ElementOperand_DataTypeVersion = 8574,
    OpcUa_XmlSchema_ElementOperand_DictionaryFragment = 8575,
    OpcUa_XmlSchema_LiteralOperand = 8576,
    OpcUa_XmlSchema_LiteralOperand_DataTypeVersion = 8577,
    OpcUa_XmlSchema_LiteralOperand_DictionaryFragment = 8578,
    OpcUa_XmlSchema_AttributeOperand = 8579,
    OpcUa_XmlSchema_AttributeOperand_DataTypeVersion = 8580,
    OpcUa_XmlSchema_AttributeOperand_DictionaryFragment = 8581,
    OpcUa_XmlSchema_SimpleAttributeOperand = 8582,
    OpcUa_XmlSchema_SimpleAttributeOperand_DataTypeVersion = 8583,
    OpcUa_XmlSchema_SimpleAttributeOperand_DictionaryFragment = 8584,
    OpcUa_XmlSchema_HistoryEvent = 8639,
    OpcUa_XmlSchema_HistoryEvent_DataTypeVersion = 8640,
    OpcUa_XmlSchema_HistoryEvent_DictionaryFragment = 8641,
    OpcUa_XmlSchema_MonitoringFilter = 8702,
    OpcUa_XmlSchema_MonitoringFilter_DataTypeVersion = 8703,
    OpcUa_XmlSchema_MonitoringFilter_DictionaryFragment = 8704,
    OpcUa_XmlSchema_EventFilter = 8708,
    OpcUa_XmlSchema_EventFilter_DataTypeVersion = 8709,
    OpcUa_XmlSchema_EventFilter_DictionaryFragment = 8710,
    OpcUa_XmlSchema_AggregateConfiguration = 8711,
    OpcUa_XmlSchema_AggregateConfiguration_DataTypeVersion = 8712,
    OpcUa_XmlSchema_AggregateConfiguration_DictionaryFragment = 8713,
    OpcUa_XmlSchema_HistoryEventFieldList = 8807,
    OpcUa_XmlSchema_HistoryEventFieldList_DataTypeVersion = 8808,
    OpcUa_XmlSchema_HistoryEventFieldList_DictionaryFragment = 8809,
    OpcUa_XmlSchema_RedundantServerDataType = 8843,
    OpcUa_XmlSchema_RedundantServerDataType_DataTypeVersion = 8844,
    OpcUa_XmlSchema_RedundantServerDataType_DictionaryFragment = 8845,
    OpcUa_XmlSchema_SamplingIntervalDiagnosticsDataType = 8846,
    OpcUa_XmlSchema_SamplingIntervalDiagnosticsDataType_DataTypeVersion = 8847,
    OpcUa_XmlSchema_SamplingIntervalDiagnosticsDataType_DictionaryFragment = 8848,
    OpcUa_XmlSchema_ServerDiagnosticsSummaryDataType = 8849,
    OpcUa_XmlSchema_ServerDiagnosticsSummaryDataType_DataTypeVersion = 8850,
    OpcUa_XmlSchema_ServerDiagnosticsSummaryDataType_DictionaryFragment = 8851,
    OpcUa_XmlSchema_ServerStatusDataType = 8852,
    OpcUa_XmlSchema_ServerStatusDataType_DataTypeVersion = 8853,
    OpcUa_XmlSchema_ServerStatusDataType_DictionaryFragment = 8854,
    OpcUa_XmlSchema_SessionDiagnosticsDataType = 8855,
    OpcUa_XmlSchema_SessionDiagnosticsDataType_DataTypeVersion = 8856,
    OpcUa_XmlSchema_SessionDiagnosticsDataType_DictionaryFragment = 8857,
    OpcUa_XmlSchema_SessionSecurityDiagnosticsDataType = 8858,
    OpcUa_XmlSchema_SessionSecurityDiagnosticsDataType_DataTypeVersion = 8859,
    OpcUa_XmlSchema_SessionSecurityDiagnosticsDataType_DictionaryFragment = 8860,
    OpcUa_XmlSchema_ServiceCounterDataType = 8861,
    OpcUa_XmlSchema_ServiceCounterDataType_DataTypeVersion = 8862,
    OpcUa_XmlSchema_ServiceCounterDataType_DictionaryFragment = 8863,
    OpcUa_XmlSchema_SubscriptionDiagnosticsDataType = 8864,
    OpcUa_XmlSchema_SubscriptionDiagnosticsDataType_DataTypeVersion = 8865,
    OpcUa_XmlSchema_SubscriptionDiagnosticsDataType_DictionaryFragment = 8866,
    OpcUa_XmlSchema_ModelChangeStructureDataType = 8867,
    OpcUa_XmlSchema_ModelChangeStructureDataType_DataTypeVersion = 8868,
    OpcUa_XmlSchema_ModelChangeStructureDataType_DictionaryFragment = 8869,
    OpcUa_XmlSchema_SemanticChangeStructureDataType = 8870,
    OpcUa_XmlSchema_SemanticChangeStructureDataType_DataTypeVersion = 8871,
    OpcUa_XmlSchema_SemanticChangeStructureDataType_DictionaryFragment = 8872,
    OpcUa_XmlSchema_Range = 8873,
    OpcUa_XmlSchema_Range_DataTypeVersion = 8874,
    OpcUa_XmlSchema_Range_DictionaryFragment = 8875,
    OpcUa_XmlSchema_EUInformation = 8876,
    OpcUa_XmlSchema_EUInformation_DataTypeVersion = 8877,
    OpcUa_XmlSchema_EUInformation_DictionaryFragment = 8878,
    OpcUa_XmlSchema_Annotation = 8879,
    OpcUa_XmlSchema_Annotation_DataTypeVersion = 8880,
    OpcUa_XmlSchema_Annotation_DictionaryFragment = 8881,
    OpcUa_XmlSchema_ProgramDiagnosticDataType = 8882,
    OpcUa_XmlSchema_ProgramDiagnosticDataType_DataTypeVersion = 8883,
    OpcUa_XmlSchema_ProgramDiagnosticDataType_DictionaryFragment = 8884,
    SubscriptionDiagnosticsType_MaxLifetimeCount = 8888,
    SubscriptionDiagnosticsType_LatePublishRequestCount = 8889,
    SubscriptionDiagnosticsType_CurrentKeepAliveCount = 8890,
    SubscriptionDiagnosticsType_CurrentLifetimeCount = 8891,
    SubscriptionDiagnosticsType_UnacknowledgedMessageCount = 8892,
    SubscriptionDiagnosticsType_DiscardedMessageCount = 8893,
    SubscriptionDiagnosticsType_MonitoredItemCount = 8894,
    SubscriptionDiagnosticsType_DisabledMonitoredItemCount = 8895,
    SubscriptionDiagnosticsType_MonitoringQueueOverflowCount = 8896,
    SubscriptionDiagnosticsType_NextSequenceNumber = 8897,
    SessionDiagnosticsObjectType_SessionDiagnostics_TotalRequestCount = 8898,
    SessionDiagnosticsVariableType_TotalRequestCount = 8900,
    SubscriptionDiagnosticsType_EventQueueOverflowCount = 8902,
    TimeZoneDataType = 8912,
    TimeZoneDataType_Encoding_DefaultXml = 8913,
    OpcUa_BinarySchema_TimeZoneDataType = 8914,
    OpcUa_BinarySchema_TimeZoneDataType_DataTypeVersion = 8915,
    OpcUa_BinarySchema_TimeZoneDataType_DictionaryFragment = 8916,
    TimeZoneDataType_Encoding_DefaultBinary = 8917,
    OpcUa_XmlSchema_TimeZoneDataType = 8918,
    OpcUa_XmlSchema_TimeZoneDataType_DataTypeVersion = 8919,
    OpcUa_XmlSchema_TimeZoneDataType_DictionaryFragment = 8920,
    AuditConditionRespondEventType = 8927,
    AuditConditionRespondEventType_EventId = 8928,
    AuditConditionRespondEventType_EventType = 8929,
    AuditConditionRespondEventType_SourceNode = 8930,
    AuditConditionRespondEventType_SourceName = 8931,
    AuditConditionRespondEventType_Time = 8932,
    AuditConditionRespondEventType_ReceiveTime = 8933,
    AuditConditionRespondEventType_LocalTime = 8934,
    AuditConditionRespondEventType_Message = 8935,
    AuditConditionRespondEventType_Severity = 8936,
    AuditConditionRespondEventType_ActionTimeStamp = 8937,
    AuditConditionRespondEventType_Status = 8938,
    AuditConditionRespondEventType_ServerId = 8939,
    AuditConditionRespondEventType_ClientAuditEntryId = 8940,
    AuditConditionRespondEventType_ClientUserId = 8941,
    AuditConditionRespondEventType_MethodId = 8942,
    AuditConditionRespondEventType_InputArguments = 8943,
    AuditConditionAcknowledgeEventType = 8944,
    AuditConditionAcknowledgeEventType_EventId = 8945,
    AuditConditionAcknowledgeEventType_EventType = 8946,
    AuditConditionAcknowledgeEventType_SourceNode = 8947,
    AuditConditionAcknowledgeEventType_SourceName = 8948,
    AuditConditionAcknowledgeEventType_Time = 8949,
    AuditConditionAcknowledgeEventType_ReceiveTime = 8950,
    AuditConditionAcknowledgeEventType_LocalTime = 8951,
    AuditConditionAcknowledgeEventType_Message = 8952,
    AuditConditionAcknowledgeEventType_Severity = 8953,
    AuditConditionAcknowledgeEventType_ActionTimeStamp = 8954,
    AuditConditionAcknowledgeEventType_Status = 8955,
    AuditConditionAcknowledgeEventType_ServerId = 8956,
    AuditConditionAcknowledgeEventType_ClientAuditEntryId = 8957,
    AuditConditionAcknowledgeEventType_ClientUserId = 8958,
    AuditConditionAcknowledgeEventType_MethodId = 8959,
    AuditConditionAcknowledgeEventType_InputArguments = 8960,
    AuditConditionConfirmEventType = 8961,
    AuditConditionConfirmEventType_EventId = 8962,
    AuditConditionConfirmEventType_EventType = 8963,
    AuditConditionConfirmEventType_SourceNode = 8964,
    AuditConditionConfirmEventType_SourceName = 8965,
    AuditConditionConfirmEventType_Time = 8966,
    AuditConditionConfirmEventType_ReceiveTime = 8967,
    AuditConditionConfirmEventType_LocalTime = 8968,
    AuditConditionConfirmEventType_Message = 8969,
    AuditConditionConfirmEventType_Severity = 8970,
    AuditConditionConfirmEventType_ActionTimeStamp = 8971,
    AuditConditionConfirmEventType_Status = 8972,
    AuditConditionConfirmEventType_ServerId = 8973,
    AuditConditionConfirmEventType_ClientAuditEntryId = 8974,
    AuditConditionConfirmEventType_ClientUserId = 8975,
    AuditConditionConfirmEventType_MethodId = 8976,
    AuditConditionConfirmEventType_InputArguments = 8977,
    TwoStateVariableType = 8995,
    TwoStateVariableType_Id = 8996,
    TwoStateVariableType_Name = 8997,
    TwoStateVariableType_Number = 8998,
    TwoStateVariableType_EffectiveDisplayName = 8999,
    TwoStateVariableType_TransitionTime = 9000,
    TwoStateVariableType_EffectiveTransitionTime = 9001,
    ConditionVariableType = 9002,
    ConditionVariableType_SourceTimestamp = 9003,
    HasTrueSubState = 9004,
    HasFalseSubState = 9005,
    HasCondition = 9006,
    ConditionRefreshMethodType = 9007,
    ConditionRefreshMethodType_InputArguments = 9008,
    ConditionType_ConditionName = 9009,
    ConditionType_BranchId = 9010,
    ConditionType_EnabledState = 9011,
    ConditionType_EnabledState_Id = 9012,
    ConditionType_EnabledState_Name = 9013,
    ConditionType_EnabledState_Number = 9014,
    ConditionType_EnabledState_EffectiveDisplayName = 9015,
    ConditionType_EnabledState_TransitionTime = 9016,
    ConditionType_EnabledState_EffectiveTransitionTime = 9017,
    ConditionType_EnabledState_TrueState = 9018,
    ConditionType_EnabledState_FalseState = 9019,
    ConditionType_Quality = 9020,
    ConditionType_Quality_SourceTimestamp = 9021,
    ConditionType_LastSeverity = 9022,
    ConditionType_LastSeverity_SourceTimestamp = 9023,
    ConditionType_Comment = 9024,
    ConditionType_Comment_SourceTimestamp = 9025,
    ConditionType_ClientUserId = 9026,
    ConditionType_Enable = 9027,
    ConditionType_Disable = 9028,
    ConditionType_AddComment = 9029,
    ConditionType_AddComment_InputArguments = 9030,
    DialogResponseMethodType = 9031,
    DialogResponseMethodType_InputArguments = 9032,
    DialogConditionType_ConditionName = 9033,
    DialogConditionType_BranchId = 9034,
    DialogConditionType_EnabledState = 9035,
    DialogConditionType_EnabledState_Id = 9036,
    DialogConditionType_EnabledState_Name = 9037,
    DialogConditionType_EnabledState_Number = 9038,
    DialogConditionType_EnabledState_EffectiveDisplayName = 9039,
    DialogConditionType_EnabledState_TransitionTime = 9040,
    DialogConditionType_EnabledState_EffectiveTransitionTime = 9041,
    DialogConditionType_EnabledState_TrueState = 9042,
    DialogConditionType_EnabledState_FalseState = 9043,
    DialogConditionType_Quality = 9044,
    DialogConditionType_Quality_SourceTimestamp = 9045,
    DialogConditionType_LastSeverity = 9046,
    DialogConditionType_LastSeverity_SourceTimestamp = 9047,
    DialogConditionType_Comment = 9048,
    DialogConditionType_Comment_SourceTimestamp = 9049,
    DialogConditionType_ClientUserId = 9050,
    DialogConditionType_Enable = 9051,
    DialogConditionType_Disable = 9052,
    DialogConditionType_AddComment = 9053,
    DialogConditionType_AddComment_InputArguments = 9054,
    DialogConditionType_DialogState = 9055,
    DialogConditionType_DialogState_Id = 9056,
    DialogConditionType_DialogState_Name = 9057,
    DialogConditionType_DialogState_Number = 9058,
    DialogConditionType_DialogState_EffectiveDisplayName = 9059,
    DialogConditionType_DialogState_TransitionTime = 9060,
    DialogConditionType_DialogState_EffectiveTransitionTime = 9061,
    DialogConditionType_DialogState_TrueState = 9062,
    DialogConditionType_DialogState_FalseState = 9063,
    DialogConditionType_ResponseOptionSet = 9064,
    DialogConditionType_DefaultResponse = 9065,
    DialogConditionType_OkResponse = 9066,
    DialogConditionType_CancelResponse = 9067,
    DialogConditionType_LastResponse = 9068,
    DialogConditionType_Respond = 9069,
    DialogConditionType_Respond_InputArguments = 9070,
    AcknowledgeableConditionType_ConditionName = 9071,
    AcknowledgeableConditionType_BranchId = 9072,
    AcknowledgeableConditionType_EnabledState = 9073,
    AcknowledgeableConditionType_EnabledState_Id = 9074,
    AcknowledgeableConditionType_EnabledState_Name = 9075,
    AcknowledgeableConditionType_EnabledState_Number = 9076,
    AcknowledgeableConditionType_EnabledState_EffectiveDisplayName = 9077,
    AcknowledgeableConditionType_EnabledState_TransitionTime = 9078,
    AcknowledgeableConditionType_EnabledState_EffectiveTransitionTime = 9079,
    AcknowledgeableConditionType_EnabledState_TrueState = 9080,
    AcknowledgeableConditionType_EnabledState_FalseState = 9081,
    AcknowledgeableConditionType_Quality = 9082,
    AcknowledgeableConditionType_Quality_SourceTimestamp = 9083,
    AcknowledgeableConditionType_LastSeverity = 9084,
    AcknowledgeableConditionType_LastSeverity_SourceTimestamp = 9085,
    AcknowledgeableConditionType_Comment = 9086,
    AcknowledgeableConditionType_Comment_SourceTimestamp = 9087,
    AcknowledgeableConditionType_ClientUserId = 9088,
    AcknowledgeableConditionType_Enable = 9089,
    AcknowledgeableConditionType_Disable = 9090,
    AcknowledgeableConditionType_AddComment = 9091,
    AcknowledgeableConditionType_AddComment_InputArguments = 9092,
    AcknowledgeableConditionType_AckedState = 9093,
    AcknowledgeableConditionType_AckedState_Id = 9094,
    AcknowledgeableConditionType_AckedState_Name = 9095,
    AcknowledgeableConditionType_AckedState_Number = 9096,
    AcknowledgeableConditionType_AckedState_EffectiveDisplayName = 9097,
    AcknowledgeableConditionType_AckedState_TransitionTime = 9098,
    AcknowledgeableConditionType_AckedState_EffectiveTransitionTime = 9099,
    AcknowledgeableConditionType_AckedState_TrueState = 9100,
    AcknowledgeableConditionType_AckedState_FalseState = 9101,
    AcknowledgeableConditionType_ConfirmedState = 9102,
    AcknowledgeableConditionType_ConfirmedState_Id = 9103,
    AcknowledgeableConditionType_ConfirmedState_Name = 9104,
    AcknowledgeableConditionType_ConfirmedState_Number = 9105,
    AcknowledgeableConditionType_ConfirmedState_EffectiveDisplayName = 9106,
    AcknowledgeableConditionType_ConfirmedState_TransitionTime = 9107,
    AcknowledgeableConditionType_ConfirmedState_EffectiveTransitionTime = 9108,
    AcknowledgeableConditionType_ConfirmedState_TrueState = 9109,
    AcknowledgeableConditionType_ConfirmedState_FalseState = 9110,
    AcknowledgeableConditionType_Acknowledge = 9111,
    AcknowledgeableConditionType_Acknowledge_InputArguments = 9112,
    AcknowledgeableConditionType_Confirm = 9113,
    AcknowledgeableConditionType_Confirm_InputArguments = 9114,
    ShelvedStateMachineType_UnshelveTime = 9115,
    AlarmConditionType_ConditionName = 9116,
    AlarmConditionType_BranchId = 9117,
    AlarmConditionType_EnabledState = 9118,
    AlarmConditionType_EnabledState_Id = 9119,
    AlarmConditionType_EnabledState_Name = 9120,
    AlarmConditionType_EnabledState_Number = 9121,
    AlarmConditionType_EnabledState_EffectiveDisplayName = 9122,
    AlarmConditionType_EnabledState_TransitionTime = 9123,
    AlarmConditionType_EnabledState_EffectiveTransitionTime = 9124,
    AlarmConditionType_EnabledState_TrueState = 9125,
    AlarmConditionType_EnabledState_FalseState = 9126,
    AlarmConditionType_Quality = 9127,
    AlarmConditionType_Quality_SourceTimestamp = 9128,
    AlarmConditionType_LastSeverity = 9129,
    AlarmConditionType_LastSeverity_SourceTimestamp = 9130,
    AlarmConditionType_Comment = 9131,
    AlarmConditionType_Comment_SourceTimestamp = 9132,
    AlarmConditionType_ClientUserId = 9133,
    AlarmConditionType_Enable = 9134,
    AlarmConditionType_Disable = 9135,
    AlarmConditionType_AddComment = 9136,
    AlarmConditionType_AddComment_InputArguments = 9137,
    AlarmConditionType_AckedState = 9138,
    AlarmConditionType_AckedState_Id = 9139,
    AlarmConditionType_AckedState_Name = 9140,
    AlarmConditionType_AckedState_Number = 9141,
    AlarmConditionType_AckedState_EffectiveDisplayName = 9142,
    AlarmConditionType_AckedState_TransitionTime = 9143,
    AlarmConditionType_AckedState_EffectiveTransitionTime = 9144,
    AlarmConditionType_AckedState_TrueState = 9145,
    AlarmConditionType_AckedState_FalseState = 9146,
    AlarmConditionType_ConfirmedState = 9147,
    AlarmConditionType_ConfirmedState_Id = 9148,
    AlarmConditionType_ConfirmedState_Name = 9149,
    AlarmConditionType_ConfirmedState_Number = 9150,
    AlarmConditionType_ConfirmedState_EffectiveDisplayName = 9151,
    AlarmConditionType_ConfirmedState_TransitionTime = 9152,
    AlarmConditionType_ConfirmedState_EffectiveTransitionTime = 9153,
    AlarmConditionType_ConfirmedState_TrueState = 9154,
    AlarmConditionType_ConfirmedState_FalseState = 9155,
    AlarmConditionType_Acknowledge = 9156,
    AlarmConditionType_Acknowledge_InputArguments = 9157,
    AlarmConditionType_Confirm = 9158,
    AlarmConditionType_Confirm_InputArguments = 9159,
    AlarmConditionType_ActiveState = 9160,
    AlarmConditionType_ActiveState_Id = 9161,
    AlarmConditionType_ActiveState_Name = 9162,
    AlarmConditionType_ActiveState_Number = 9163,
    AlarmConditionType_ActiveState_EffectiveDisplayName = 9164,
    AlarmConditionType_ActiveState_TransitionTime = 9165,
    AlarmConditionType_ActiveState_EffectiveTransitionTime = 9166,
    AlarmConditionType_ActiveState_TrueState = 9167,
    AlarmConditionType_ActiveState_FalseState = 9168,
    AlarmConditionType_SuppressedState = 9169,
    AlarmConditionType_SuppressedState_Id = 9170,
    AlarmConditionType_SuppressedState_Name = 9171,
    AlarmConditionType_SuppressedState_Number = 9172,
    AlarmConditionType_SuppressedState_EffectiveDisplayName = 9173,
    AlarmConditionType_SuppressedState_TransitionTime = 9174,
    AlarmConditionType_SuppressedState_EffectiveTransitionTime = 9175,
    AlarmConditionType_SuppressedState_TrueState = 9176,
    AlarmConditionType_SuppressedState_FalseState = 9177,
    AlarmConditionType_ShelvingState = 9178,
    AlarmConditionType_ShelvingState_CurrentState = 9179,
    AlarmConditionType_ShelvingState_CurrentState_Id = 9180,
    AlarmConditionType_ShelvingState_CurrentState_Name = 9181,
    AlarmConditionType_ShelvingState_CurrentState_Number = 9182,
    AlarmConditionType_ShelvingState_CurrentState_EffectiveDisplayName = 9183,
    AlarmConditionType_ShelvingState_LastTransition = 9184,
    AlarmConditionType_ShelvingState_LastTransition_Id = 9185,
    AlarmConditionType_ShelvingState_LastTransition_Name = 9186,
    AlarmConditionType_ShelvingState_LastTransition_Number = 9187,
    AlarmConditionType_ShelvingState_LastTransition_TransitionTime = 9188,
    AlarmConditionType_ShelvingState_UnshelveTime = 9189,
    AlarmConditionType_ShelvingState_Unshelve = 9211,
    AlarmConditionType_ShelvingState_OneShotShelve = 9212,
    AlarmConditionType_ShelvingState_TimedShelve = 9213,
    AlarmConditionType_ShelvingState_TimedShelve_InputArguments = 9214,
    AlarmConditionType_SuppressedOrShelved = 9215,
    AlarmConditionType_MaxTimeShelved = 9216,
    LimitAlarmType_ConditionName = 9217,
    LimitAlarmType_BranchId = 9218,
    LimitAlarmType_EnabledState = 9219,
    LimitAlarmType_EnabledState_Id = 9220,
    LimitAlarmType_EnabledState_Name = 9221,
    LimitAlarmType_EnabledState_Number = 9222,
    LimitAlarmType_EnabledState_EffectiveDisplayName = 9223,
    LimitAlarmType_EnabledState_TransitionTime = 9224,
    LimitAlarmType_EnabledState_EffectiveTransitionTime = 9225,
    LimitAlarmType_EnabledState_TrueState = 9226,
    LimitAlarmType_EnabledState_FalseState = 9227,
    LimitAlarmType_Quality = 9228,
    LimitAlarmType_Quality_SourceTimestamp = 9229,
    LimitAlarmType_LastSeverity = 9230,
    LimitAlarmType_LastSeverity_SourceTimestamp = 9231,
    LimitAlarmType_Comment = 9232,
    LimitAlarmType_Comment_SourceTimestamp = 9233,
    LimitAlarmType_ClientUserId = 9234,
    LimitAlarmType_Enable = 9235,
    LimitAlarmType_Disable = 9236,
    LimitAlarmType_AddComment = 9237,
    LimitAlarmType_AddComment_InputArguments = 9238,
    LimitAlarmType_AckedState = 9239,
    LimitAlarmType_AckedState_Id = 9240,
    LimitAlarmType_AckedState_Name = 9241,
    LimitAlarmType_AckedState_Number = 9242,
    LimitAlarmType_AckedState_EffectiveDisplayName = 9243,
    LimitAlarmType_AckedState_TransitionTime = 9244,
    LimitAlarmType_AckedState_EffectiveTransitionTime = 9245,
    LimitAlarmType_AckedState_TrueState = 9246,
    LimitAlarmType_AckedState_FalseState = 9247,
    LimitAlarmType_ConfirmedState = 9248,
    LimitAlarmType_ConfirmedState_Id = 9249,
    LimitAlarmType_ConfirmedState_Name = 9250,
    LimitAlarmType_ConfirmedState_Number = 9251,
    LimitAlarmType_ConfirmedState_EffectiveDisplayName = 9252,
    LimitAlarmType_ConfirmedState_TransitionTime = 9253,
    LimitAlarmType_ConfirmedState_EffectiveTransitionTime = 9254,
    LimitAlarmType_ConfirmedState_TrueState = 9255,
    LimitAlarmType_ConfirmedState_FalseState = 9256,
    LimitAlarmType_Acknowledge = 9257,
    LimitAlarmType_Acknowledge_InputArguments = 9258,
    LimitAlarmType_Confirm = 9259,
    LimitAlarmType_Confirm_InputArguments = 9260,
    LimitAlarmType_ActiveState = 9261,
    LimitAlarmType_ActiveState_Id = 9262,
    LimitAlarmType_ActiveState_Name = 9263,
    LimitAlarmType_ActiveState_Number = 9264,
    LimitAlarmType_ActiveState_EffectiveDisplayName = 9265,
    LimitAlarmType_ActiveState_TransitionTime = 9266,
    LimitAlarmType_ActiveState_EffectiveTransitionTime = 9267,
    LimitAlarmType_ActiveState_TrueState = 9268,
    LimitAlarmType_ActiveState_FalseState = 9269,
    LimitAlarmType_SuppressedState = 9270,
    LimitAlarmType_SuppressedState_Id = 9271,
    LimitAlarmType_SuppressedState_Name = 9272,
    LimitAlarmType_SuppressedState_Number = 9273,
    LimitAlarmType_SuppressedState_EffectiveDisplayName = 9274,
    LimitAlarmType_SuppressedState_TransitionTime = 9275,
    LimitAlarmType_SuppressedState_EffectiveTransitionTime = 9276,
    LimitAlarmType_SuppressedState_TrueState = 9277,
    LimitAlarmType_SuppressedState_FalseState = 9278,
    LimitAlarmType_ShelvingState = 9279,
    LimitAlarmType_ShelvingState_CurrentState = 9280,
    LimitAlarmType_ShelvingState_CurrentState_Id = 9281,
    LimitAlarmType_ShelvingState_CurrentState_Name = 9282,
    LimitAlarmType_ShelvingState_CurrentState_Number = 9283,
    LimitAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 9284,
    LimitAlarmType_ShelvingState_LastTransition = 9285,
    LimitAlarmType_ShelvingState_LastTransition_Id = 9286,
    LimitAlarmType_ShelvingState_LastTransition_Name = 9287,
    LimitAlarmType_ShelvingState_LastTransition_Number = 9288,
    LimitAlarmType_ShelvingState_LastTransition_TransitionTime = 9289,
    LimitAlarmType_ShelvingState_UnshelveTime = 9290,
    LimitAlarmType_ShelvingState_Unshelve = 9312,
    LimitAlarmType_ShelvingState_OneShotShelve = 9313,
    LimitAlarmType_ShelvingState_TimedShelve = 9314,
    LimitAlarmType_ShelvingState_TimedShelve_InputArguments = 9315,
    LimitAlarmType_SuppressedOrShelved = 9316,
    LimitAlarmType_MaxTimeShelved = 9317,
    ExclusiveLimitStateMachineType = 9318,
    ExclusiveLimitStateMachineType_CurrentState = 9319,
    ExclusiveLimitStateMachineType_CurrentState_Id = 9320,
    ExclusiveLimitStateMachineType_CurrentState_Name = 9321,
    ExclusiveLimitStateMachineType_CurrentState_Number = 9322,
    ExclusiveLimitStateMachineType_CurrentState_EffectiveDisplayName = 9323,
    ExclusiveLimitStateMachineType_LastTransition = 9324,
    ExclusiveLimitStateMachineType_LastTransition_Id = 9325,
    ExclusiveLimitStateMachineType_LastTransition_Name = 9326,
    ExclusiveLimitStateMachineType_LastTransition_Number = 9327,
    ExclusiveLimitStateMachineType_LastTransition_TransitionTime = 9328,
    ExclusiveLimitStateMachineType_HighHigh = 9329,
    ExclusiveLimitStateMachineType_HighHigh_StateNumber = 9330,
    ExclusiveLimitStateMachineType_High = 9331,
    ExclusiveLimitStateMachineType_High_StateNumber = 9332,
    ExclusiveLimitStateMachineType_Low = 9333,
    ExclusiveLimitStateMachineType_Low_StateNumber = 9334,
    ExclusiveLimitStateMachineType_LowLow = 9335,
    ExclusiveLimitStateMachineType_LowLow_StateNumber = 9336,
    ExclusiveLimitStateMachineType_LowLowToLow = 9337,
    ExclusiveLimitStateMachineType_LowToLowLow = 9338,
    ExclusiveLimitStateMachineType_HighHighToHigh = 9339,
    ExclusiveLimitStateMachineType_HighToHighHigh = 9340,
    ExclusiveLimitAlarmType = 9341,
    ExclusiveLimitAlarmType_EventId = 9342,
    ExclusiveLimitAlarmType_EventType = 9343,
    ExclusiveLimitAlarmType_SourceNode = 9344,
    ExclusiveLimitAlarmType_SourceName = 9345,
    ExclusiveLimitAlarmType_Time = 9346,
    ExclusiveLimitAlarmType_ReceiveTime = 9347,
    ExclusiveLimitAlarmType_LocalTime = 9348,
    ExclusiveLimitAlarmType_Message = 9349,
    ExclusiveLimitAlarmType_Severity = 9350,
    ExclusiveLimitAlarmType_ConditionName = 9351,
    ExclusiveLimitAlarmType_BranchId = 9352,
    ExclusiveLimitAlarmType_Retain = 9353,
    ExclusiveLimitAlarmType_EnabledState = 9354,
    ExclusiveLimitAlarmType_EnabledState_Id = 9355,
    ExclusiveLimitAlarmType_EnabledState_Name = 9356,
    ExclusiveLimitAlarmType_EnabledState_Number = 9357,
    ExclusiveLimitAlarmType_EnabledState_EffectiveDisplayName = 9358,
    ExclusiveLimitAlarmType_EnabledState_TransitionTime = 9359,
    ExclusiveLimitAlarmType_EnabledState_EffectiveTransitionTime = 9360,
    ExclusiveLimitAlarmType_EnabledState_TrueState = 9361,
    ExclusiveLimitAlarmType_EnabledState_FalseState = 9362,
    ExclusiveLimitAlarmType_Quality = 9363,
    ExclusiveLimitAlarmType_Quality_SourceTimestamp = 9364,
    ExclusiveLimitAlarmType_LastSeverity = 9365,
    ExclusiveLimitAlarmType_LastSeverity_SourceTimestamp = 9366,
    ExclusiveLimitAlarmType_Comment = 9367,
    ExclusiveLimitAlarmType_Comment_SourceTimestamp = 9368,
    ExclusiveLimitAlarmType_ClientUserId = 9369,
    ExclusiveLimitAlarmType_Enable = 9370,
    ExclusiveLimitAlarmType_Disable = 9371,
    ExclusiveLimitAlarmType_AddComment = 9372,
    ExclusiveLimitAlarmType_AddComment_InputArguments = 9373,
    ExclusiveLimitAlarmType_ConditionRefresh = 9374,
    ExclusiveLimitAlarmType_ConditionRefresh_InputArguments = 9375,
    ExclusiveLimitAlarmType_AckedState = 9376,
    ExclusiveLimitAlarmType_AckedState_Id = 9377,
    ExclusiveLimitAlarmType_AckedState_Name = 9378,
    ExclusiveLimitAlarmType_AckedState_Number = 9379,
    ExclusiveLimitAlarmType_AckedState_EffectiveDisplayName = 9380,
    ExclusiveLimitAlarmType_AckedState_TransitionTime = 9381,
    ExclusiveLimitAlarmType_AckedState_EffectiveTransitionTime = 9382,
    ExclusiveLimitAlarmType_AckedState_TrueState = 9383,
    ExclusiveLimitAlarmType_AckedState_FalseState = 9384,
    ExclusiveLimitAlarmType_ConfirmedState = 9385,
    ExclusiveLimitAlarmType_ConfirmedState_Id = 9386,
    ExclusiveLimitAlarmType_ConfirmedState_Name = 9387,
    ExclusiveLimitAlarmType_ConfirmedState_Number = 9388,
    ExclusiveLimitAlarmType_ConfirmedState_EffectiveDisplayName = 9389,
    ExclusiveLimitAlarmType_ConfirmedState_TransitionTime = 9390,
    ExclusiveLimitAlarmType_ConfirmedState_EffectiveTransitionTime = 9391,
    ExclusiveLimitAlarmType_ConfirmedState_TrueState = 9392,
    ExclusiveLimitAlarmType_ConfirmedState_FalseState = 9393,
    ExclusiveLimitAlarmType_Acknowledge = 9394,
    ExclusiveLimitAlarmType_Acknowledge_InputArguments = 9395,
    ExclusiveLimitAlarmType_Confirm = 9396,
    ExclusiveLimitAlarmType_Confirm_InputArguments = 9397,
    ExclusiveLimitAlarmType_ActiveState = 9398,
    ExclusiveLimitAlarmType_ActiveState_Id = 9399,
    ExclusiveLimitAlarmType_ActiveState_Name = 9400,
    ExclusiveLimitAlarmType_ActiveState_Number = 9401,
    ExclusiveLimitAlarmType_ActiveState_EffectiveDisplayName = 9402,
    ExclusiveLimitAlarmType_ActiveState_TransitionTime = 9403,
    ExclusiveLimitAlarmType_ActiveState_EffectiveTransitionTime = 9404,
    ExclusiveLimitAlarmType_ActiveState_TrueState = 9405,
    ExclusiveLimitAlarmType_ActiveState_FalseState = 9406,
    ExclusiveLimitAlarmType_SuppressedState = 9407,
    ExclusiveLimitAlarmType_SuppressedState_Id = 9408,
    ExclusiveLimitAlarmType_SuppressedState_Name = 9409,
    ExclusiveLimitAlarmType_SuppressedState_Number = 9410,
    ExclusiveLimitAlarmType_SuppressedState_EffectiveDisplayName = 9411,
    ExclusiveLimitAlarmType_SuppressedState_TransitionTime = 9412,
    ExclusiveLimitAlarmType_SuppressedState_EffectiveTransitionTime = 9413,
    ExclusiveLimitAlarmType_SuppressedState_TrueState = 9414,
    ExclusiveLimitAlarmType_SuppressedState_FalseState = 9415,
    ExclusiveLimitAlarmType_ShelvingState = 9416,
    ExclusiveLimitAlarmType_ShelvingState_CurrentState = 9417,
    ExclusiveLimitAlarmType_ShelvingState_CurrentState_Id = 9418,
    ExclusiveLimitAlarmType_ShelvingState_CurrentState_Name = 9419,
    ExclusiveLimitAlarmType_ShelvingState_CurrentState_Number = 9420,
    ExclusiveLimitAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 9421,
    ExclusiveLimitAlarmType_ShelvingState_LastTransition = 9422,
    ExclusiveLimitAlarmType_ShelvingState_LastTransition_Id = 9423,
    ExclusiveLimitAlarmType_ShelvingState_LastTransition_Name = 9424,
    ExclusiveLimitAlarmType_ShelvingState_LastTransition_Number = 9425,
    ExclusiveLimitAlarmType_ShelvingState_LastTransition_TransitionTime = 9426,
    ExclusiveLimitAlarmType_ShelvingState_UnshelveTime = 9427,
    ExclusiveLimitAlarmType_ShelvingState_Unshelve = 9449,
    ExclusiveLimitAlarmType_ShelvingState_OneShotShelve = 9450,
    ExclusiveLimitAlarmType_ShelvingState_TimedShelve = 9451,
    ExclusiveLimitAlarmType_ShelvingState_TimedShelve_InputArguments = 9452,
    ExclusiveLimitAlarmType_SuppressedOrShelved = 9453,
    ExclusiveLimitAlarmType_MaxTimeShelved = 9454,
    ExclusiveLimitAlarmType_LimitState = 9455,
    ExclusiveLimitAlarmType_LimitState_CurrentState = 9456,
    ExclusiveLimitAlarmType_LimitState_CurrentState_Id = 9457,
    ExclusiveLimitAlarmType_LimitState_CurrentState_Name = 9458,
    ExclusiveLimitAlarmType_LimitState_CurrentState_Number = 9459,
    ExclusiveLimitAlarmType_LimitState_CurrentState_EffectiveDisplayName = 9460,
    ExclusiveLimitAlarmType_LimitState_LastTransition = 9461,
    ExclusiveLimitAlarmType_LimitState_LastTransition_Id = 9462,
    ExclusiveLimitAlarmType_LimitState_LastTransition_Name = 9463,
    ExclusiveLimitAlarmType_LimitState_LastTransition_Number = 9464,
    ExclusiveLimitAlarmType_LimitState_LastTransition_TransitionTime = 9465,
    ExclusiveLimitAlarmType_HighHighLimit = 9478,
    ExclusiveLimitAlarmType_HighLimit = 9479,
    ExclusiveLimitAlarmType_LowLimit = 9480,
    ExclusiveLimitAlarmType_LowLowLimit = 9481,
    ExclusiveLevelAlarmType = 9482,
    ExclusiveLevelAlarmType_EventId = 9483,
    ExclusiveLevelAlarmType_EventType = 9484,
    ExclusiveLevelAlarmType_SourceNode = 9485,
    ExclusiveLevelAlarmType_SourceName = 9486,
    ExclusiveLevelAlarmType_Time = 9487,
    ExclusiveLevelAlarmType_ReceiveTime = 9488,
    ExclusiveLevelAlarmType_LocalTime = 9489,
    ExclusiveLevelAlarmType_Message = 9490,
    ExclusiveLevelAlarmType_Severity = 9491,
    ExclusiveLevelAlarmType_ConditionName = 9492,
    ExclusiveLevelAlarmType_BranchId = 9493,
    ExclusiveLevelAlarmType_Retain = 9494,
    ExclusiveLevelAlarmType_EnabledState = 9495,
    ExclusiveLevelAlarmType_EnabledState_Id = 9496,
    ExclusiveLevelAlarmType_EnabledState_Name = 9497,
    ExclusiveLevelAlarmType_EnabledState_Number = 9498,
    ExclusiveLevelAlarmType_EnabledState_EffectiveDisplayName = 9499,
    ExclusiveLevelAlarmType_EnabledState_TransitionTime = 9500,
    ExclusiveLevelAlarmType_EnabledState_EffectiveTransitionTime = 9501,
    ExclusiveLevelAlarmType_EnabledState_TrueState = 9502,
    ExclusiveLevelAlarmType_EnabledState_FalseState = 9503,
    ExclusiveLevelAlarmType_Quality = 9504,
    ExclusiveLevelAlarmType_Quality_SourceTimestamp = 9505,
    ExclusiveLevelAlarmType_LastSeverity = 9506,
    ExclusiveLevelAlarmType_LastSeverity_SourceTimestamp = 9507,
    ExclusiveLevelAlarmType_Comment = 9508,
    ExclusiveLevelAlarmType_Comment_SourceTimestamp = 9509,
    ExclusiveLevelAlarmType_ClientUserId = 9510,
    ExclusiveLevelAlarmType_Enable = 9511,
    ExclusiveLevelAlarmType_Disable = 9512,
    ExclusiveLevelAlarmType_AddComment = 9513,
    ExclusiveLevelAlarmType_AddComment_InputArguments = 9514,
    ExclusiveLevelAlarmType_ConditionRefresh = 9515,
    ExclusiveLevelAlarmType_ConditionRefresh_InputArguments = 9516,
    ExclusiveLevelAlarmType_AckedState = 9517,
    ExclusiveLevelAlarmType_AckedState_Id = 9518,
    ExclusiveLevelAlarmType_AckedState_Name = 9519,
    ExclusiveLevelAlarmType_AckedState_Number = 9520,
    ExclusiveLevelAlarmType_AckedState_EffectiveDisplayName = 9521,
    ExclusiveLevelAlarmType_AckedState_TransitionTime = 9522,
    ExclusiveLevelAlarmType_AckedState_EffectiveTransitionTime = 9523,
    ExclusiveLevelAlarmType_AckedState_TrueState = 9524,
    ExclusiveLevelAlarmType_AckedState_FalseState = 9525,
    ExclusiveLevelAlarmType_ConfirmedState = 9526,
    ExclusiveLevelAlarmType_ConfirmedState_Id = 9527,
    ExclusiveLevelAlarmType_ConfirmedState_Name = 9528,
    ExclusiveLevelAlarmType_ConfirmedState_Number = 9529,
    ExclusiveLevelAlarmType_ConfirmedState_EffectiveDisplayName = 9530,
    ExclusiveLevelAlarmType_ConfirmedState_TransitionTime = 9531,
    ExclusiveLevelAlarmType_ConfirmedState_EffectiveTransitionTime = 9532,
    ExclusiveLevelAlarmType_ConfirmedState_TrueState = 9533,
    ExclusiveLevelAlarmType_ConfirmedState_FalseState = 9534,
    ExclusiveLevelAlarmType_Acknowledge = 9535,
    ExclusiveLevelAlarmType_Acknowledge_InputArguments = 9536,
    ExclusiveLevelAlarmType_Confirm = 9537,
    ExclusiveLevelAlarmType_Confirm_InputArguments = 9538,
    ExclusiveLevelAlarmType_ActiveState = 9539,
    ExclusiveLevelAlarmType_ActiveState_Id = 9540,
    ExclusiveLevelAlarmType_ActiveState_Name = 9541,
    ExclusiveLevelAlarmType_ActiveState_Number = 9542,
    ExclusiveLevelAlarmType_ActiveState_EffectiveDisplayName = 9543,
    ExclusiveLevelAlarmType_ActiveState_TransitionTime = 9544,
    ExclusiveLevelAlarmType_ActiveState_EffectiveTransitionTime = 9545,
    ExclusiveLevelAlarmType_ActiveState_TrueState = 9546,
    ExclusiveLevelAlarmType_ActiveState_FalseState = 9547,
    ExclusiveLevelAlarmType_SuppressedState = 9548,
    ExclusiveLevelAlarmType_SuppressedState_Id = 9549,
    ExclusiveLevelAlarmType_SuppressedState_Name = 9550,
    ExclusiveLevelAlarmType_SuppressedState_Number = 9551,
    ExclusiveLevelAlarmType_SuppressedState_EffectiveDisplayName = 9552,
    ExclusiveLevelAlarmType_SuppressedState_TransitionTime = 9553,
    ExclusiveLevelAlarmType_SuppressedState_EffectiveTransitionTime = 9554,
    ExclusiveLevelAlarmType_SuppressedState_TrueState = 9555,
    ExclusiveLevelAlarmType_SuppressedState_FalseState = 9556,
    ExclusiveLevelAlarmType_ShelvingState = 9557,
    ExclusiveLevelAlarmType_ShelvingState_CurrentState = 9558,
    ExclusiveLevelAlarmType_ShelvingState_CurrentState_Id = 9559,
    ExclusiveLevelAlarmType_ShelvingState_CurrentState_Name = 9560,
    ExclusiveLevelAlarmType_ShelvingState_CurrentState_Number = 9561,
    ExclusiveLevelAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 9562,
    ExclusiveLevelAlarmType_ShelvingState_LastTransition = 9563,
    ExclusiveLevelAlarmType_ShelvingState_LastTransition_Id = 9564,
    ExclusiveLevelAlarmType_ShelvingState_LastTransition_Name = 9565,
    ExclusiveLevelAlarmType_ShelvingState_LastTransition_Number = 9566,
    ExclusiveLevelAlarmType_ShelvingState_LastTransition_TransitionTime = 9567,
    ExclusiveLevelAlarmType_ShelvingState_UnshelveTime = 9568,
    ExclusiveLevelAlarmType_ShelvingState_Unshelve = 9590,
    ExclusiveLevelAlarmType_ShelvingState_OneShotShelve = 9591,
    ExclusiveLevelAlarmType_ShelvingState_TimedShelve = 9592,
    ExclusiveLevelAlarmType_ShelvingState_TimedShelve_InputArguments = 9593,
    ExclusiveLevelAlarmType_SuppressedOrShelved = 9594,
    ExclusiveLevelAlarmType_MaxTimeShelved = 9595,
    ExclusiveLevelAlarmType_LimitState = 9596,
    ExclusiveLevelAlarmType_LimitState_CurrentState = 9597,
    ExclusiveLevelAlarmType_LimitState_CurrentState_Id = 9598,
    ExclusiveLevelAlarmType_LimitState_CurrentState_Name = 9599,
    ExclusiveLevelAlarmType_LimitState_CurrentState_Number = 9600,
    ExclusiveLevelAlarmType_LimitState_CurrentState_EffectiveDisplayName = 9601,
    ExclusiveLevelAlarmType_LimitState_LastTransition = 9602,
    ExclusiveLevelAlarmType_LimitState_LastTransition_Id = 9603,
    ExclusiveLevelAlarmType_LimitState_LastTransition_Name = 9604,
    ExclusiveLevelAlarmType_LimitState_LastTransition_Number = 9605,
    ExclusiveLevelAlarmType_LimitState_LastTransition_TransitionTime = 9606,
    ExclusiveLevelAlarmType_HighHighLimit = 9619,
    ExclusiveLevelAlarmType_HighLimit = 9620,
    ExclusiveLevelAlarmType_LowLimit = 9621,
    ExclusiveLevelAlarmType_LowLowLimit = 9622,
    ExclusiveRateOfChangeAlarmType = 9623,
    ExclusiveRateOfChangeAlarmType_EventId = 9624,
    ExclusiveRateOfChangeAlarmType_EventType = 9625,
    ExclusiveRateOfChangeAlarmType_SourceNode = 9626,
    ExclusiveRateOfChangeAlarmType_SourceName = 9627,
    ExclusiveRateOfChangeAlarmType_Time = 9628,
    ExclusiveRateOfChangeAlarmType_ReceiveTime = 9629,
    ExclusiveRateOfChangeAlarmType_LocalTime = 9630,
    ExclusiveRateOfChangeAlarmType_Message = 9631,
    ExclusiveRateOfChangeAlarmType_Severity = 9632,
    ExclusiveRateOfChangeAlarmType_ConditionName = 9633,
    ExclusiveRateOfChangeAlarmType_BranchId = 9634,
    ExclusiveRateOfChangeAlarmType_Retain = 9635,
    ExclusiveRateOfChangeAlarmType_EnabledState = 9636,
    ExclusiveRateOfChangeAlarmType_EnabledState_Id = 9637,
    ExclusiveRateOfChangeAlarmType_EnabledState_Name = 9638,
    ExclusiveRateOfChangeAlarmType_EnabledState_Number = 9639,
    ExclusiveRateOfChangeAlarmType_EnabledState_EffectiveDisplayName = 9640,
    ExclusiveRateOfChangeAlarmType_EnabledState_TransitionTime = 9641,
    ExclusiveRateOfChangeAlarmType_EnabledState_EffectiveTransitionTime = 9642,
    ExclusiveRateOfChangeAlarmType_EnabledState_TrueState = 9643,
    ExclusiveRateOfChangeAlarmType_EnabledState_FalseState = 9644,
    ExclusiveRateOfChangeAlarmType_Quality = 9645,
    ExclusiveRateOfChangeAlarmType_Quality_SourceTimestamp = 9646,
    ExclusiveRateOfChangeAlarmType_LastSeverity = 9647,
    ExclusiveRateOfChangeAlarmType_LastSeverity_SourceTimestamp = 9648,
    ExclusiveRateOfChangeAlarmType_Comment = 9649,
    ExclusiveRateOfChangeAlarmType_Comment_SourceTimestamp = 9650,
    ExclusiveRateOfChangeAlarmType_ClientUserId = 9651,
    ExclusiveRateOfChangeAlarmType_Enable = 9652,
    ExclusiveRateOfChangeAlarmType_Disable = 9653,
    ExclusiveRateOfChangeAlarmType_AddComment = 9654,
    ExclusiveRateOfChangeAlarmType_AddComment_InputArguments = 9655,
    ExclusiveRateOfChangeAlarmType_ConditionRefresh = 9656,
    ExclusiveRateOfChangeAlarmType_ConditionRefresh_InputArguments = 9657,
    ExclusiveRateOfChangeAlarmType_AckedState = 9658,
    ExclusiveRateOfChangeAlarmType_AckedState_Id = 9659,
    ExclusiveRateOfChangeAlarmType_AckedState_Name = 9660,
    ExclusiveRateOfChangeAlarmType_AckedState_Number = 9661,
    ExclusiveRateOfChangeAlarmType_AckedState_EffectiveDisplayName = 9662,
    ExclusiveRateOfChangeAlarmType_AckedState_TransitionTime = 9663,
    ExclusiveRateOfChangeAlarmType_AckedState_EffectiveTransitionTime = 9664,
    ExclusiveRateOfChangeAlarmType_AckedState_TrueState = 9665,
    ExclusiveRateOfChangeAlarmType_AckedState_FalseState = 9666,
    ExclusiveRateOfChangeAlarmType_ConfirmedState = 9667,
    ExclusiveRateOfChangeAlarmType_ConfirmedState_Id = 9668,
    ExclusiveRateOfChangeAlarmType_ConfirmedState_Name = 9669,
    ExclusiveRateOfChangeAlarmType_ConfirmedState_Number = 9670,
    ExclusiveRateOfChangeAlarmType_ConfirmedState_EffectiveDisplayName = 9671,
    ExclusiveRateOfChangeAlarmType_ConfirmedState_TransitionTime = 9672,
    ExclusiveRateOfChangeAlarmType_ConfirmedState_EffectiveTransitionTime = 9673,
    ExclusiveRateOfChangeAlarmType_ConfirmedState_TrueState = 9674,
    ExclusiveRateOfChangeAlarmType_ConfirmedState_FalseState = 9675,
    ExclusiveRateOfChangeAlarmType_Acknowledge = 9676,
    ExclusiveRateOfChangeAlarmType_Acknowledge_InputArguments = 9677,
    ExclusiveRateOfChangeAlarmType_Confirm = 9678,
    ExclusiveRateOfChangeAlarmType_Confirm_InputArguments = 9679,
    ExclusiveRateOfChangeAlarmType_ActiveState = 9680,
    ExclusiveRateOfChangeAlarmType_ActiveState_Id = 9681,
    ExclusiveRateOfChangeAlarmType_ActiveState_Name = 9682,
    ExclusiveRateOfChangeAlarmType_ActiveState_Number = 9683,
    ExclusiveRateOfChangeAlarmType_ActiveState_EffectiveDisplayName = 9684,
    ExclusiveRateOfChangeAlarmType_ActiveState_TransitionTime = 9685,
    ExclusiveRateOfChangeAlarmType_ActiveState_EffectiveTransitionTime = 9686,
    ExclusiveRateOfChangeAlarmType_ActiveState_TrueState = 9687,
    ExclusiveRateOfChangeAlarmType_ActiveState_FalseState = 9688,
    ExclusiveRateOfChangeAlarmType_SuppressedState = 9689,
    ExclusiveRateOfChangeAlarmType_SuppressedState_Id = 9690,
    ExclusiveRateOfChangeAlarmType_SuppressedState_Name = 9691,
    ExclusiveRateOfChangeAlarmType_SuppressedState_Number = 9692,
    ExclusiveRateOfChangeAlarmType_SuppressedState_EffectiveDisplayName = 9693,
    ExclusiveRateOfChangeAlarmType_SuppressedState_TransitionTime = 9694,
    ExclusiveRateOfChangeAlarmType_SuppressedState_EffectiveTransitionTime = 9695,
    ExclusiveRateOfChangeAlarmType_SuppressedState_TrueState = 9696,
    ExclusiveRateOfChangeAlarmType_SuppressedState_FalseState = 9697,
    ExclusiveRateOfChangeAlarmType_ShelvingState = 9698,
    ExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState = 9699,
    ExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState_Id = 9700,
    ExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState_Name = 9701,
    ExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState_Number = 9702,
    ExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 9703,
    ExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition = 9704,
    ExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_Id = 9705,
    ExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_Name = 9706,
    ExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_Number = 9707,
    ExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_TransitionTime = 9708,
    ExclusiveRateOfChangeAlarmType_ShelvingState_UnshelveTime = 9709,
    ExclusiveRateOfChangeAlarmType_ShelvingState_Unshelve = 9731,
    ExclusiveRateOfChangeAlarmType_ShelvingState_OneShotShelve = 9732,
    ExclusiveRateOfChangeAlarmType_ShelvingState_TimedShelve = 9733,
    ExclusiveRateOfChangeAlarmType_ShelvingState_TimedShelve_InputArguments = 9734,
    ExclusiveRateOfChangeAlarmType_SuppressedOrShelved = 9735,
    ExclusiveRateOfChangeAlarmType_MaxTimeShelved = 9736,
    ExclusiveRateOfChangeAlarmType_LimitState = 9737,
    ExclusiveRateOfChangeAlarmType_LimitState_CurrentState = 9738,
    ExclusiveRateOfChangeAlarmType_LimitState_CurrentState_Id = 9739,
    ExclusiveRateOfChangeAlarmType_LimitState_CurrentState_Name = 9740,
    ExclusiveRateOfChangeAlarmType_LimitState_CurrentState_Number = 9741,
    ExclusiveRateOfChangeAlarmType_LimitState_CurrentState_EffectiveDisplayName = 9742,
    ExclusiveRateOfChangeAlarmType_LimitState_LastTransition = 9743,
    ExclusiveRateOfChangeAlarmType_LimitState_LastTransition_Id = 9744,
    ExclusiveRateOfChangeAlarmType_LimitState_LastTransition_Name = 9745,
    ExclusiveRateOfChangeAlarmType_LimitState_LastTransition_Number = 9746,
    ExclusiveRateOfChangeAlarmType_LimitState_LastTransition_TransitionTime = 9747,
    ExclusiveRateOfChangeAlarmType_HighHighLimit = 9760,
    ExclusiveRateOfChangeAlarmType_HighLimit = 9761,
    ExclusiveRateOfChangeAlarmType_LowLimit = 9762,
    ExclusiveRateOfChangeAlarmType_LowLowLimit = 9763,
    ExclusiveDeviationAlarmType = 9764,
    ExclusiveDeviationAlarmType_EventId = 9765,
    ExclusiveDeviationAlarmType_EventType = 9766,
    ExclusiveDeviationAlarmType_SourceNode = 9767,
    ExclusiveDeviationAlarmType_SourceName = 9768,
    ExclusiveDeviationAlarmType_Time = 9769,
    ExclusiveDeviationAlarmType_ReceiveTime = 9770,
    ExclusiveDeviationAlarmType_LocalTime = 9771,
    ExclusiveDeviationAlarmType_Message = 9772,
    ExclusiveDeviationAlarmType_Severity = 9773,
    ExclusiveDeviationAlarmType_ConditionName = 9774,
    ExclusiveDeviationAlarmType_BranchId = 9775,
    ExclusiveDeviationAlarmType_Retain = 9776,
    ExclusiveDeviationAlarmType_EnabledState = 9777,
    ExclusiveDeviationAlarmType_EnabledState_Id = 9778,
    ExclusiveDeviationAlarmType_EnabledState_Name = 9779,
    ExclusiveDeviationAlarmType_EnabledState_Number = 9780,
    ExclusiveDeviationAlarmType_EnabledState_EffectiveDisplayName = 9781,
    ExclusiveDeviationAlarmType_EnabledState_TransitionTime = 9782,
    ExclusiveDeviationAlarmType_EnabledState_EffectiveTransitionTime = 9783,
    ExclusiveDeviationAlarmType_EnabledState_TrueState = 9784,
    ExclusiveDeviationAlarmType_EnabledState_FalseState = 9785,
    ExclusiveDeviationAlarmType_Quality = 9786,
    ExclusiveDeviationAlarmType_Quality_SourceTimestamp = 9787,
    ExclusiveDeviationAlarmType_LastSeverity = 9788,
    ExclusiveDeviationAlarmType_LastSeverity_SourceTimestamp = 9789,
    ExclusiveDeviationAlarmType_Comment = 9790,
    ExclusiveDeviationAlarmType_Comment_SourceTimestamp = 9791,
    ExclusiveDeviationAlarmType_ClientUserId = 9792,
    ExclusiveDeviationAlarmType_Enable = 9793,
    ExclusiveDeviationAlarmType_Disable = 9794,
    ExclusiveDeviationAlarmType_AddComment = 9795,
    ExclusiveDeviationAlarmType_AddComment_InputArguments = 9796,
    ExclusiveDeviationAlarmType_ConditionRefresh = 9797,
    ExclusiveDeviationAlarmType_ConditionRefresh_InputArguments = 9798,
    ExclusiveDeviationAlarmType_AckedState = 9799,
    ExclusiveDeviationAlarmType_AckedState_Id = 9800,
    ExclusiveDeviationAlarmType_AckedState_Name = 9801,
    ExclusiveDeviationAlarmType_AckedState_Number = 9802,
    ExclusiveDeviationAlarmType_AckedState_EffectiveDisplayName = 9803,
    ExclusiveDeviationAlarmType_AckedState_TransitionTime = 9804,
    ExclusiveDeviationAlarmType_AckedState_EffectiveTransitionTime = 9805,
    ExclusiveDeviationAlarmType_AckedState_TrueState = 9806,
    ExclusiveDeviationAlarmType_AckedState_FalseState = 9807,
    ExclusiveDeviationAlarmType_ConfirmedState = 9808,
    ExclusiveDeviationAlarmType_ConfirmedState_Id = 9809,
    ExclusiveDeviationAlarmType_ConfirmedState_Name = 9810,
    ExclusiveDeviationAlarmType_ConfirmedState_Number = 9811,
    ExclusiveDeviationAlarmType_ConfirmedState_EffectiveDisplayName = 9812,
    ExclusiveDeviationAlarmType_ConfirmedState_TransitionTime = 9813,
    ExclusiveDeviationAlarmType_ConfirmedState_EffectiveTransitionTime = 9814,
    ExclusiveDeviationAlarmType_ConfirmedState_TrueState = 9815,
    ExclusiveDeviationAlarmType_ConfirmedState_FalseState = 9816,
    ExclusiveDeviationAlarmType_Acknowledge = 9817,
    ExclusiveDeviationAlarmType_Acknowledge_InputArguments = 9818,
    ExclusiveDeviationAlarmType_Confirm = 9819,
    ExclusiveDeviationAlarmType_Confirm_InputArguments = 9820,
    ExclusiveDeviationAlarmType_ActiveState = 9821,
    ExclusiveDeviationAlarmType_ActiveState_Id = 9822,
    ExclusiveDeviationAlarmType_ActiveState_Name = 9823,
    ExclusiveDeviationAlarmType_ActiveState_Number = 9824,
    ExclusiveDeviationAlarmType_ActiveState_EffectiveDisplayName = 9825,
    ExclusiveDeviationAlarmType_ActiveState_TransitionTime = 9826,
    ExclusiveDeviationAlarmType_ActiveState_EffectiveTransitionTime = 9827,
    ExclusiveDeviationAlarmType_ActiveState_TrueState = 9828,
    ExclusiveDeviationAlarmType_ActiveState_FalseState = 9829,
    ExclusiveDeviationAlarmType_SuppressedState = 9830,
    ExclusiveDeviationAlarmType_SuppressedState_Id = 9831,
    ExclusiveDeviationAlarmType_SuppressedState_Name = 9832,
    ExclusiveDeviationAlarmType_SuppressedState_Number = 9833,
    ExclusiveDeviationAlarmType_SuppressedState_EffectiveDisplayName = 9834,
    ExclusiveDeviationAlarmType_SuppressedState_TransitionTime = 9835,
    ExclusiveDeviationAlarmType_SuppressedState_EffectiveTransitionTime = 9836,
    ExclusiveDeviationAlarmType_SuppressedState_TrueState = 9837,
    ExclusiveDeviationAlarmType_SuppressedState_FalseState = 9838,
    ExclusiveDeviationAlarmType_ShelvingState = 9839,
    ExclusiveDeviationAlarmType_ShelvingState_CurrentState = 9840,
    ExclusiveDeviationAlarmType_ShelvingState_CurrentState_Id = 9841,
    ExclusiveDeviationAlarmType_ShelvingState_CurrentState_Name = 9842,
    ExclusiveDeviationAlarmType_ShelvingState_CurrentState_Number = 9843,
    ExclusiveDeviationAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 9844,
    ExclusiveDeviationAlarmType_ShelvingState_LastTransition = 9845,
    ExclusiveDeviationAlarmType_ShelvingState_LastTransition_Id = 9846,
    ExclusiveDeviationAlarmType_ShelvingState_LastTransition_Name = 9847,
    ExclusiveDeviationAlarmType_ShelvingState_LastTransition_Number = 9848,
    ExclusiveDeviationAlarmType_ShelvingState_LastTransition_TransitionTime = 9849,
    ExclusiveDeviationAlarmType_ShelvingState_UnshelveTime = 9850,
    ExclusiveDeviationAlarmType_ShelvingState_Unshelve = 9872,
    ExclusiveDeviationAlarmType_ShelvingState_OneShotShelve = 9873,
    ExclusiveDeviationAlarmType_ShelvingState_TimedShelve = 9874,
    ExclusiveDeviationAlarmType_ShelvingState_TimedShelve_InputArguments = 9875,
    ExclusiveDeviationAlarmType_SuppressedOrShelved = 9876,
    ExclusiveDeviationAlarmType_MaxTimeShelved = 9877,
    ExclusiveDeviationAlarmType_LimitState = 9878,
    ExclusiveDeviationAlarmType_LimitState_CurrentState = 9879,
    ExclusiveDeviationAlarmType_LimitState_CurrentState_Id = 9880,
    ExclusiveDeviationAlarmType_LimitState_CurrentState_Name = 9881,
    ExclusiveDeviationAlarmType_LimitState_CurrentState_Number = 9882,
    ExclusiveDeviationAlarmType_LimitState_CurrentState_EffectiveDisplayName = 9883,
    ExclusiveDeviationAlarmType_LimitState_LastTransition = 9884,
    ExclusiveDeviationAlarmType_LimitState_LastTransition_Id = 9885,
    ExclusiveDeviationAlarmType_LimitState_LastTransition_Name = 9886,
    ExclusiveDeviationAlarmType_LimitState_LastTransition_Number = 9887,
    ExclusiveDeviationAlarmType_LimitState_LastTransition_TransitionTime = 9888,
    ExclusiveDeviationAlarmType_HighHighLimit = 9901,
    ExclusiveDeviationAlarmType_HighLimit = 9902,
    ExclusiveDeviationAlarmType_LowLimit = 9903,
    ExclusiveDeviationAlarmType_LowLowLimit = 9904,
    ExclusiveDeviationAlarmType_SetpointNode = 9905,
    NonExclusiveLimitAlarmType = 9906,
    NonExclusiveLimitAlarmType_EventId = 9907,
    NonExclusiveLimitAlarmType_EventType = 9908,
    NonExclusiveLimitAlarmType_SourceNode = 9909,
    NonExclusiveLimitAlarmType_SourceName = 9910,
    NonExclusiveLimitAlarmType_Time = 9911,
    NonExclusiveLimitAlarmType_ReceiveTime = 9912,
    NonExclusiveLimitAlarmType_LocalTime = 9913,
    NonExclusiveLimitAlarmType_Message = 9914,
    NonExclusiveLimitAlarmType_Severity = 9915,
    NonExclusiveLimitAlarmType_ConditionName = 9916,
    NonExclusiveLimitAlarmType_BranchId = 9917,
    NonExclusiveLimitAlarmType_Retain = 9918,
    NonExclusiveLimitAlarmType_EnabledState = 9919,
    NonExclusiveLimitAlarmType_EnabledState_Id = 9920,
    NonExclusiveLimitAlarmType_EnabledState_Name = 9921,
    NonExclusiveLimitAlarmType_EnabledState_Number = 9922,
    NonExclusiveLimitAlarmType_EnabledState_EffectiveDisplayName = 9923,
    NonExclusiveLimitAlarmType_EnabledState_TransitionTime = 9924,
    NonExclusiveLimitAlarmType_EnabledState_EffectiveTransitionTime = 9925,
    NonExclusiveLimitAlarmType_EnabledState_TrueState = 9926,
    NonExclusiveLimitAlarmType_EnabledState_FalseState = 9927,
    NonExclusiveLimitAlarmType_Quality = 9928,
    NonExclusiveLimitAlarmType_Quality_SourceTimestamp = 9929,
    NonExclusiveLimitAlarmType_LastSeverity = 9930,
    NonExclusiveLimitAlarmType_LastSeverity_SourceTimestamp = 9931,
    NonExclusiveLimitAlarmType_Comment = 9932,
    NonExclusiveLimitAlarmType_Comment_SourceTimestamp = 9933,
    NonExclusiveLimitAlarmType_ClientUserId = 9934,
    NonExclusiveLimitAlarmType_Enable = 9935,
    NonExclusiveLimitAlarmType_Disable = 9936,
    NonExclusiveLimitAlarmType_AddComment = 9937,
    NonExclusiveLimitAlarmType_AddComment_InputArguments = 9938,
    NonExclusiveLimitAlarmType_ConditionRefresh = 9939,
    NonExclusiveLimitAlarmType_ConditionRefresh_InputArguments = 9940,
    NonExclusiveLimitAlarmType_AckedState = 9941,
    NonExclusiveLimitAlarmType_AckedState_Id = 9942,
    NonExclusiveLimitAlarmType_AckedState_Name = 9943,
    NonExclusiveLimitAlarmType_AckedState_Number = 9944,
    NonExclusiveLimitAlarmType_AckedState_EffectiveDisplayName = 9945,
    NonExclusiveLimitAlarmType_AckedState_TransitionTime = 9946,
    NonExclusiveLimitAlarmType_AckedState_EffectiveTransitionTime = 9947,
    NonExclusiveLimitAlarmType_AckedState_TrueState = 9948,
    NonExclusiveLimitAlarmType_AckedState_FalseState = 9949,
    NonExclusiveLimitAlarmType_ConfirmedState = 9950,
    NonExclusiveLimitAlarmType_ConfirmedState_Id = 9951,
    NonExclusiveLimitAlarmType_ConfirmedState_Name = 9952,
    NonExclusiveLimitAlarmType_ConfirmedState_Number = 9953,
    NonExclusiveLimitAlarmType_ConfirmedState_EffectiveDisplayName = 9954,
    NonExclusiveLimitAlarmType_ConfirmedState_TransitionTime = 9955,
    NonExclusiveLimitAlarmType_ConfirmedState_EffectiveTransitionTime = 9956,
    NonExclusiveLimitAlarmType_ConfirmedState_TrueState = 9957,
    NonExclusiveLimitAlarmType_ConfirmedState_FalseState = 9958,
    NonExclusiveLimitAlarmType_Acknowledge = 9959,
    NonExclusiveLimitAlarmType_Acknowledge_InputArguments = 9960,
    NonExclusiveLimitAlarmType_Confirm = 9961,
    NonExclusiveLimitAlarmType_Confirm_InputArguments = 9962,
    NonExclusiveLimitAlarmType_ActiveState = 9963,
    NonExclusiveLimitAlarmType_ActiveState_Id = 9964,
    NonExclusiveLimitAlarmType_ActiveState_Name = 9965,
    NonExclusiveLimitAlarmType_ActiveState_Number = 9966,
    NonExclusiveLimitAlarmType_ActiveState_EffectiveDisplayName = 9967,
    NonExclusiveLimitAlarmType_ActiveState_TransitionTime = 9968,
    NonExclusiveLimitAlarmType_ActiveState_EffectiveTransitionTime = 9969,
    NonExclusiveLimitAlarmType_ActiveState_TrueState = 9970,
    NonExclusiveLimitAlarmType_ActiveState_FalseState = 9971,
    NonExclusiveLimitAlarmType_SuppressedState = 9972,
    NonExclusiveLimitAlarmType_SuppressedState_Id = 9973,
    NonExclusiveLimitAlarmType_SuppressedState_Name = 9974,
    NonExclusiveLimitAlarmType_SuppressedState_Number = 9975,
    NonExclusiveLimitAlarmType_SuppressedState_EffectiveDisplayName = 9976,
    NonExclusiveLimitAlarmType_SuppressedState_TransitionTime = 9977,
    NonExclusiveLimitAlarmType_SuppressedState_EffectiveTransitionTime = 9978,
    NonExclusiveLimitAlarmType_SuppressedState_TrueState = 9979,
    NonExclusiveLimitAlarmType_SuppressedState_FalseState = 9980,
    NonExclusiveLimitAlarmType_ShelvingState = 9981,
    NonExclusiveLimitAlarmType_ShelvingState_CurrentState = 9982,
    NonExclusiveLimitAlarmType_ShelvingState_CurrentState_Id = 9983,
    NonExclusiveLimitAlarmType_ShelvingState_CurrentState_Name = 9984,
    NonExclusiveLimitAlarmType_ShelvingState_CurrentState_Number = 9985,
    NonExclusiveLimitAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 9986,
    NonExclusiveLimitAlarmType_ShelvingState_LastTransition = 9987,
    NonExclusiveLimitAlarmType_ShelvingState_LastTransition_Id = 9988,
    NonExclusiveLimitAlarmType_ShelvingState_LastTransition_Name = 9989,
    NonExclusiveLimitAlarmType_ShelvingState_LastTransition_Number = 9990,
    NonExclusiveLimitAlarmType_ShelvingState_LastTransition_TransitionTime = 9991,
    NonExclusiveLimitAlarmType_ShelvingState_UnshelveTime = 9992,
    NonExclusiveLimitAlarmType_ShelvingState_Unshelve = 10014,
    NonExclusiveLimitAlarmType_ShelvingState_OneShotShelve = 10015,
    NonExclusiveLimitAlarmType_ShelvingState_TimedShelve = 10016,
    NonExclusiveLimitAlarmType_ShelvingState_TimedShelve_InputArguments = 10017,
    NonExclusiveLimitAlarmType_SuppressedOrShelved = 10018,
    NonExclusiveLimitAlarmType_MaxTimeShelved = 10019,
    NonExclusiveLimitAlarmType_HighHighState = 10020,
    NonExclusiveLimitAlarmType_HighHighState_Id = 10021,
    NonExclusiveLimitAlarmType_HighHighState_Name = 10022,
    NonExclusiveLimitAlarmType_HighHighState_Number = 10023,
    NonExclusiveLimitAlarmType_HighHighState_EffectiveDisplayName = 10024,
    NonExclusiveLimitAlarmType_HighHighState_TransitionTime = 10025,
    NonExclusiveLimitAlarmType_HighHighState_EffectiveTransitionTime = 10026,
    NonExclusiveLimitAlarmType_HighHighState_TrueState = 10027,
    NonExclusiveLimitAlarmType_HighHighState_FalseState = 10028,
    NonExclusiveLimitAlarmType_HighState = 10029,
    NonExclusiveLimitAlarmType_HighState_Id = 10030,
    NonExclusiveLimitAlarmType_HighState_Name = 10031,
    NonExclusiveLimitAlarmType_HighState_Number = 10032,
    NonExclusiveLimitAlarmType_HighState_EffectiveDisplayName = 10033,
    NonExclusiveLimitAlarmType_HighState_TransitionTime = 10034,
    NonExclusiveLimitAlarmType_HighState_EffectiveTransitionTime = 10035,
    NonExclusiveLimitAlarmType_HighState_TrueState = 10036,
    NonExclusiveLimitAlarmType_HighState_FalseState = 10037,
    NonExclusiveLimitAlarmType_LowState = 10038,
    NonExclusiveLimitAlarmType_LowState_Id = 10039,
    NonExclusiveLimitAlarmType_LowState_Name = 10040,
    NonExclusiveLimitAlarmType_LowState_Number = 10041,
    NonExclusiveLimitAlarmType_LowState_EffectiveDisplayName = 10042,
    NonExclusiveLimitAlarmType_LowState_TransitionTime = 10043,
    NonExclusiveLimitAlarmType_LowState_EffectiveTransitionTime = 10044,
    NonExclusiveLimitAlarmType_LowState_TrueState = 10045,
    NonExclusiveLimitAlarmType_LowState_FalseState = 10046,
    NonExclusiveLimitAlarmType_LowLowState = 10047,
    NonExclusiveLimitAlarmType_LowLowState_Id = 10048,
    NonExclusiveLimitAlarmType_LowLowState_Name = 10049,
    NonExclusiveLimitAlarmType_LowLowState_Number = 10050,
    NonExclusiveLimitAlarmType_LowLowState_EffectiveDisplayName = 10051,
    NonExclusiveLimitAlarmType_LowLowState_TransitionTime = 10052,
    NonExclusiveLimitAlarmType_LowLowState_EffectiveTransitionTime = 10053,
    NonExclusiveLimitAlarmType_LowLowState_TrueState = 10054,
    NonExclusiveLimitAlarmType_LowLowState_FalseState = 10055,
    NonExclusiveLimitAlarmType_HighHighLimit = 10056,
    NonExclusiveLimitAlarmType_HighLimit = 10057,
    NonExclusiveLimitAlarmType_LowLimit = 10058,
    NonExclusiveLimitAlarmType_LowLowLimit = 10059,
    NonExclusiveLevelAlarmType = 10060,
    NonExclusiveLevelAlarmType_EventId = 10061,
    NonExclusiveLevelAlarmType_EventType = 10062,
    NonExclusiveLevelAlarmType_SourceNode = 10063,
    NonExclusiveLevelAlarmType_SourceName = 10064,
    NonExclusiveLevelAlarmType_Time = 10065,
    NonExclusiveLevelAlarmType_ReceiveTime = 10066,
    NonExclusiveLevelAlarmType_LocalTime = 10067,
    NonExclusiveLevelAlarmType_Message = 10068,
    NonExclusiveLevelAlarmType_Severity = 10069,
    NonExclusiveLevelAlarmType_ConditionName = 10070,
    NonExclusiveLevelAlarmType_BranchId = 10071,
    NonExclusiveLevelAlarmType_Retain = 10072,
    NonExclusiveLevelAlarmType_EnabledState = 10073,
    NonExclusiveLevelAlarmType_EnabledState_Id = 10074,
    NonExclusiveLevelAlarmType_EnabledState_Name = 10075,
    NonExclusiveLevelAlarmType_EnabledState_Number = 10076,
    NonExclusiveLevelAlarmType_EnabledState_EffectiveDisplayName = 10077,
    NonExclusiveLevelAlarmType_EnabledState_TransitionTime = 10078,
    NonExclusiveLevelAlarmType_EnabledState_EffectiveTransitionTime = 10079,
    NonExclusiveLevelAlarmType_EnabledState_TrueState = 10080,
    NonExclusiveLevelAlarmType_EnabledState_FalseState = 10081,
    NonExclusiveLevelAlarmType_Quality = 10082,
    NonExclusiveLevelAlarmType_Quality_SourceTimestamp = 10083,
    NonExclusiveLevelAlarmType_LastSeverity = 10084,
    NonExclusiveLevelAlarmType_LastSeverity_SourceTimestamp = 10085,
    NonExclusiveLevelAlarmType_Comment = 10086,
    NonExclusiveLevelAlarmType_Comment_SourceTimestamp = 10087,
    NonExclusiveLevelAlarmType_ClientUserId = 10088,
    NonExclusiveLevelAlarmType_Enable = 10089,
    NonExclusiveLevelAlarmType_Disable = 10090,
    NonExclusiveLevelAlarmType_AddComment = 10091,
    NonExclusiveLevelAlarmType_AddComment_InputArguments = 10092,
    NonExclusiveLevelAlarmType_ConditionRefresh = 10093,
    NonExclusiveLevelAlarmType_ConditionRefresh_InputArguments = 10094,
    NonExclusiveLevelAlarmType_AckedState = 10095,
    NonExclusiveLevelAlarmType_AckedState_Id = 10096,
    NonExclusiveLevelAlarmType_AckedState_Name = 10097,
    NonExclusiveLevelAlarmType_AckedState_Number = 10098,
    NonExclusiveLevelAlarmType_AckedState_EffectiveDisplayName = 10099,
    NonExclusiveLevelAlarmType_AckedState_TransitionTime = 10100,
    NonExclusiveLevelAlarmType_AckedState_EffectiveTransitionTime = 10101,
    NonExclusiveLevelAlarmType_AckedState_TrueState = 10102,
    NonExclusiveLevelAlarmType_AckedState_FalseState = 10103,
    NonExclusiveLevelAlarmType_ConfirmedState = 10104,
    NonExclusiveLevelAlarmType_ConfirmedState_Id = 10105,
    NonExclusiveLevelAlarmType_ConfirmedState_Name = 10106,
    NonExclusiveLevelAlarmType_ConfirmedState_Number = 10107,
    NonExclusiveLevelAlarmType_ConfirmedState_EffectiveDisplayName = 10108,
    NonExclusiveLevelAlarmType_ConfirmedState_TransitionTime = 10109,
    NonExclusiveLevelAlarmType_ConfirmedState_EffectiveTransitionTime = 10110,
    NonExclusiveLevelAlarmType_ConfirmedState_TrueState = 10111,
    NonExclusiveLevelAlarmType_ConfirmedState_FalseState = 10112,
    NonExclusiveLevelAlarmType_Acknowledge = 10113,
    NonExclusiveLevelAlarmType_Acknowledge_InputArguments = 10114,
    NonExclusiveLevelAlarmType_Confirm = 10115,
    NonExclusiveLevelAlarmType_Confirm_InputArguments = 10116,
    NonExclusiveLevelAlarmType_ActiveState = 10117,
    NonExclusiveLevelAlarmType_ActiveState_Id = 10118,
    NonExclusiveLevelAlarmType_ActiveState_Name = 10119,
    NonExclusiveLevelAlarmType_ActiveState_Number = 10120,
    NonExclusiveLevelAlarmType_ActiveState_EffectiveDisplayName = 10121,
    NonExclusiveLevelAlarmType_ActiveState_TransitionTime = 10122,
    NonExclusiveLevelAlarmType_ActiveState_EffectiveTransitionTime = 10123,
    NonExclusiveLevelAlarmType_ActiveState_TrueState = 10124,
    NonExclusiveLevelAlarmType_ActiveState_FalseState = 10125,
    NonExclusiveLevelAlarmType_SuppressedState = 10126,
    NonExclusiveLevelAlarmType_SuppressedState_Id = 10127,
    NonExclusiveLevelAlarmType_SuppressedState_Name = 10128,
    NonExclusiveLevelAlarmType_SuppressedState_Number = 10129,
    NonExclusiveLevelAlarmType_SuppressedState_EffectiveDisplayName = 10130,
    NonExclusiveLevelAlarmType_SuppressedState_TransitionTime = 10131,
    NonExclusiveLevelAlarmType_SuppressedState_EffectiveTransitionTime = 10132,
    NonExclusiveLevelAlarmType_SuppressedState_TrueState = 10133,
    NonExclusiveLevelAlarmType_SuppressedState_FalseState = 10134,
    NonExclusiveLevelAlarmType_ShelvingState = 10135,
    NonExclusiveLevelAlarmType_ShelvingState_CurrentState = 10136,
    NonExclusiveLevelAlarmType_ShelvingState_CurrentState_Id = 10137,
    NonExclusiveLevelAlarmType_ShelvingState_CurrentState_Name = 10138,
    NonExclusiveLevelAlarmType_ShelvingState_CurrentState_Number = 10139,
    NonExclusiveLevelAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 10140,
    NonExclusiveLevelAlarmType_ShelvingState_LastTransition = 10141,
    NonExclusiveLevelAlarmType_ShelvingState_LastTransition_Id = 10142,
    NonExclusiveLevelAlarmType_ShelvingState_LastTransition_Name = 10143,
    NonExclusiveLevelAlarmType_ShelvingState_LastTransition_Number = 10144,
    NonExclusiveLevelAlarmType_ShelvingState_LastTransition_TransitionTime = 10145,
    NonExclusiveLevelAlarmType_ShelvingState_UnshelveTime = 10146,
    NonExclusiveLevelAlarmType_ShelvingState_Unshelve = 10168,
    NonExclusiveLevelAlarmType_ShelvingState_OneShotShelve = 10169,
    NonExclusiveLevelAlarmType_ShelvingState_TimedShelve = 10170,
    NonExclusiveLevelAlarmType_ShelvingState_TimedShelve_InputArguments = 10171,
    NonExclusiveLevelAlarmType_SuppressedOrShelved = 10172,
    NonExclusiveLevelAlarmType_MaxTimeShelved = 10173,
    NonExclusiveLevelAlarmType_HighHighState = 10174,
    NonExclusiveLevelAlarmType_HighHighState_Id = 10175,
    NonExclusiveLevelAlarmType_HighHighState_Name = 10176,
    NonExclusiveLevelAlarmType_HighHighState_Number = 10177,
    NonExclusiveLevelAlarmType_HighHighState_EffectiveDisplayName = 10178,
    NonExclusiveLevelAlarmType_HighHighState_TransitionTime = 10179,
    NonExclusiveLevelAlarmType_HighHighState_EffectiveTransitionTime = 10180,
    NonExclusiveLevelAlarmType_HighHighState_TrueState = 10181,
    NonExclusiveLevelAlarmType_HighHighState_FalseState = 10182,
    NonExclusiveLevelAlarmType_HighState = 10183,
    NonExclusiveLevelAlarmType_HighState_Id = 10184,
    NonExclusiveLevelAlarmType_HighState_Name = 10185,
    NonExclusiveLevelAlarmType_HighState_Number = 10186,
    NonExclusiveLevelAlarmType_HighState_EffectiveDisplayName = 10187,
    NonExclusiveLevelAlarmType_HighState_TransitionTime = 10188,
    NonExclusiveLevelAlarmType_HighState_EffectiveTransitionTime = 10189,
    NonExclusiveLevelAlarmType_HighState_TrueState = 10190,
    NonExclusiveLevelAlarmType_HighState_FalseState = 10191,
    NonExclusiveLevelAlarmType_LowState = 10192,
    NonExclusiveLevelAlarmType_LowState_Id = 10193,
    NonExclusiveLevelAlarmType_LowState_Name = 10194,
    NonExclusiveLevelAlarmType_LowState_Number = 10195,
    NonExclusiveLevelAlarmType_LowState_EffectiveDisplayName = 10196,
    NonExclusiveLevelAlarmType_LowState_TransitionTime = 10197,
    NonExclusiveLevelAlarmType_LowState_EffectiveTransitionTime = 10198,
    NonExclusiveLevelAlarmType_LowState_TrueState = 10199,
    NonExclusiveLevelAlarmType_LowState_FalseState = 10200,
    NonExclusiveLevelAlarmType_LowLowState = 10201,
    NonExclusiveLevelAlarmType_LowLowState_Id = 10202,
    NonExclusiveLevelAlarmType_LowLowState_Name = 10203,
    NonExclusiveLevelAlarmType_LowLowState_Number = 10204,
    NonExclusiveLevelAlarmType_LowLowState_EffectiveDisplayName = 10205,
    NonExclusiveLevelAlarmType_LowLowState_TransitionTime = 10206,
    NonExclusiveLevelAlarmType_LowLowState_EffectiveTransitionTime = 10207,
    NonExclusiveLevelAlarmType_LowLowState_TrueState = 10208,
    NonExclusiveLevelAlarmType_LowLowState_FalseState = 10209,
    NonExclusiveLevelAlarmType_HighHighLimit = 10210,
    NonExclusiveLevelAlarmType_HighLimit = 10211,
    NonExclusiveLevelAlarmType_LowLimit = 10212,
    NonExclusiveLevelAlarmType_LowLowLimit = 10213,
    NonExclusiveRateOfChangeAlarmType = 10214,
    NonExclusiveRateOfChangeAlarmType_EventId = 10215,
    NonExclusiveRateOfChangeAlarmType_EventType = 10216,
    NonExclusiveRateOfChangeAlarmType_SourceNode = 10217,
    NonExclusiveRateOfChangeAlarmType_SourceName = 10218,
    NonExclusiveRateOfChangeAlarmType_Time = 10219,
    NonExclusiveRateOfChangeAlarmType_ReceiveTime = 10220,
    NonExclusiveRateOfChangeAlarmType_LocalTime = 10221,
    NonExclusiveRateOfChangeAlarmType_Message = 10222,
    NonExclusiveRateOfChangeAlarmType_Severity = 10223,
    NonExclusiveRateOfChangeAlarmType_ConditionName = 10224,
    NonExclusiveRateOfChangeAlarmType_BranchId = 10225,
    NonExclusiveRateOfChangeAlarmType_Retain = 10226,
    NonExclusiveRateOfChangeAlarmType_EnabledState = 10227,
    NonExclusiveRateOfChangeAlarmType_EnabledState_Id = 10228,
    NonExclusiveRateOfChangeAlarmType_EnabledState_Name = 10229,
    NonExclusiveRateOfChangeAlarmType_EnabledState_Number = 10230,
    NonExclusiveRateOfChangeAlarmType_EnabledState_EffectiveDisplayName = 10231,
    NonExclusiveRateOfChangeAlarmType_EnabledState_TransitionTime = 10232,
    NonExclusiveRateOfChangeAlarmType_EnabledState_EffectiveTransitionTime = 10233,
    NonExclusiveRateOfChangeAlarmType_EnabledState_TrueState = 10234,
    NonExclusiveRateOfChangeAlarmType_EnabledState_FalseState = 10235,
    NonExclusiveRateOfChangeAlarmType_Quality = 10236,
    NonExclusiveRateOfChangeAlarmType_Quality_SourceTimestamp = 10237,
    NonExclusiveRateOfChangeAlarmType_LastSeverity = 10238,
    NonExclusiveRateOfChangeAlarmType_LastSeverity_SourceTimestamp = 10239,
    NonExclusiveRateOfChangeAlarmType_Comment = 10240,
    NonExclusiveRateOfChangeAlarmType_Comment_SourceTimestamp = 10241,
    NonExclusiveRateOfChangeAlarmType_ClientUserId = 10242,
    NonExclusiveRateOfChangeAlarmType_Enable = 10243,
    NonExclusiveRateOfChangeAlarmType_Disable = 10244,
    NonExclusiveRateOfChangeAlarmType_AddComment = 10245,
    NonExclusiveRateOfChangeAlarmType_AddComment_InputArguments = 10246,
    NonExclusiveRateOfChangeAlarmType_ConditionRefresh = 10247,
    NonExclusiveRateOfChangeAlarmType_ConditionRefresh_InputArguments = 10248,
    NonExclusiveRateOfChangeAlarmType_AckedState = 10249,
    NonExclusiveRateOfChangeAlarmType_AckedState_Id = 10250,
    NonExclusiveRateOfChangeAlarmType_AckedState_Name = 10251,
    NonExclusiveRateOfChangeAlarmType_AckedState_Number = 10252,
    NonExclusiveRateOfChangeAlarmType_AckedState_EffectiveDisplayName = 10253,
    NonExclusiveRateOfChangeAlarmType_AckedState_TransitionTime = 10254,
    NonExclusiveRateOfChangeAlarmType_AckedState_EffectiveTransitionTime = 10255,
    NonExclusiveRateOfChangeAlarmType_AckedState_TrueState = 10256,
    NonExclusiveRateOfChangeAlarmType_AckedState_FalseState = 10257,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState = 10258,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState_Id = 10259,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState_Name = 10260,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState_Number = 10261,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState_EffectiveDisplayName = 10262,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState_TransitionTime = 10263,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState_EffectiveTransitionTime = 10264,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState_TrueState = 10265,
    NonExclusiveRateOfChangeAlarmType_ConfirmedState_FalseState = 10266,
    NonExclusiveRateOfChangeAlarmType_Acknowledge = 10267,
    NonExclusiveRateOfChangeAlarmType_Acknowledge_InputArguments = 10268,
    NonExclusiveRateOfChangeAlarmType_Confirm = 10269,
    NonExclusiveRateOfChangeAlarmType_Confirm_InputArguments = 10270,
    NonExclusiveRateOfChangeAlarmType_ActiveState = 10271,
    NonExclusiveRateOfChangeAlarmType_ActiveState_Id = 10272,
    NonExclusiveRateOfChangeAlarmType_ActiveState_Name = 10273,
    NonExclusiveRateOfChangeAlarmType_ActiveState_Number = 10274,
    NonExclusiveRateOfChangeAlarmType_ActiveState_EffectiveDisplayName = 10275,
    NonExclusiveRateOfChangeAlarmType_ActiveState_TransitionTime = 10276,
    NonExclusiveRateOfChangeAlarmType_ActiveState_EffectiveTransitionTime = 10277,
    NonExclusiveRateOfChangeAlarmType_ActiveState_TrueState = 10278,
    NonExclusiveRateOfChangeAlarmType_ActiveState_FalseState = 10279,
    NonExclusiveRateOfChangeAlarmType_SuppressedState = 10280,
    NonExclusiveRateOfChangeAlarmType_SuppressedState_Id = 10281,
    NonExclusiveRateOfChangeAlarmType_SuppressedState_Name = 10282,
    NonExclusiveRateOfChangeAlarmType_SuppressedState_Number = 10283,
    NonExclusiveRateOfChangeAlarmType_SuppressedState_EffectiveDisplayName = 10284,
    NonExclusiveRateOfChangeAlarmType_SuppressedState_TransitionTime = 10285,
    NonExclusiveRateOfChangeAlarmType_SuppressedState_EffectiveTransitionTime = 10286,
    NonExclusiveRateOfChangeAlarmType_SuppressedState_TrueState = 10287,
    NonExclusiveRateOfChangeAlarmType_SuppressedState_FalseState = 10288,
    NonExclusiveRateOfChangeAlarmType_ShelvingState = 10289,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState = 10290,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState_Id = 10291,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState_Name = 10292,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState_Number = 10293,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 10294,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition = 10295,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_Id = 10296,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_Name = 10297,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_Number = 10298,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_TransitionTime = 10299,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_UnshelveTime = 10300,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_Unshelve = 10322,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_OneShotShelve = 10323,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_TimedShelve = 10324,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_TimedShelve_InputArguments = 10325,
    NonExclusiveRateOfChangeAlarmType_SuppressedOrShelved = 10326,
    NonExclusiveRateOfChangeAlarmType_MaxTimeShelved = 10327,
    NonExclusiveRateOfChangeAlarmType_HighHighState = 10328,
    NonExclusiveRateOfChangeAlarmType_HighHighState_Id = 10329,
    NonExclusiveRateOfChangeAlarmType_HighHighState_Name = 10330,
    NonExclusiveRateOfChangeAlarmType_HighHighState_Number = 10331,
    NonExclusiveRateOfChangeAlarmType_HighHighState_EffectiveDisplayName = 10332,
    NonExclusiveRateOfChangeAlarmType_HighHighState_TransitionTime = 10333,
    NonExclusiveRateOfChangeAlarmType_HighHighState_EffectiveTransitionTime = 10334,
    NonExclusiveRateOfChangeAlarmType_HighHighState_TrueState = 10335,
    NonExclusiveRateOfChangeAlarmType_HighHighState_FalseState = 10336,
    NonExclusiveRateOfChangeAlarmType_HighState = 10337,
    NonExclusiveRateOfChangeAlarmType_HighState_Id = 10338,
    NonExclusiveRateOfChangeAlarmType_HighState_Name = 10339,
    NonExclusiveRateOfChangeAlarmType_HighState_Number = 10340,
    NonExclusiveRateOfChangeAlarmType_HighState_EffectiveDisplayName = 10341,
    NonExclusiveRateOfChangeAlarmType_HighState_TransitionTime = 10342,
    NonExclusiveRateOfChangeAlarmType_HighState_EffectiveTransitionTime = 10343,
    NonExclusiveRateOfChangeAlarmType_HighState_TrueState = 10344,
    NonExclusiveRateOfChangeAlarmType_HighState_FalseState = 10345,
    NonExclusiveRateOfChangeAlarmType_LowState = 10346,
    NonExclusiveRateOfChangeAlarmType_LowState_Id = 10347,
    NonExclusiveRateOfChangeAlarmType_LowState_Name = 10348,
    NonExclusiveRateOfChangeAlarmType_LowState_Number = 10349,
    NonExclusiveRateOfChangeAlarmType_LowState_EffectiveDisplayName = 10350,
    NonExclusiveRateOfChangeAlarmType_LowState_TransitionTime = 10351,
    NonExclusiveRateOfChangeAlarmType_LowState_EffectiveTransitionTime = 10352,
    NonExclusiveRateOfChangeAlarmType_LowState_TrueState = 10353,
    NonExclusiveRateOfChangeAlarmType_LowState_FalseState = 10354,
    NonExclusiveRateOfChangeAlarmType_LowLowState = 10355,
    NonExclusiveRateOfChangeAlarmType_LowLowState_Id = 10356,
    NonExclusiveRateOfChangeAlarmType_LowLowState_Name = 10357,
    NonExclusiveRateOfChangeAlarmType_LowLowState_Number = 10358,
    NonExclusiveRateOfChangeAlarmType_LowLowState_EffectiveDisplayName = 10359,
    NonExclusiveRateOfChangeAlarmType_LowLowState_TransitionTime = 10360,
    NonExclusiveRateOfChangeAlarmType_LowLowState_EffectiveTransitionTime = 10361,
    NonExclusiveRateOfChangeAlarmType_LowLowState_TrueState = 10362,
    NonExclusiveRateOfChangeAlarmType_LowLowState_FalseState = 10363,
    NonExclusiveRateOfChangeAlarmType_HighHighLimit = 10364,
    NonExclusiveRateOfChangeAlarmType_HighLimit = 10365,
    NonExclusiveRateOfChangeAlarmType_LowLimit = 10366,
    NonExclusiveRateOfChangeAlarmType_LowLowLimit = 10367,
    NonExclusiveDeviationAlarmType = 10368,
    NonExclusiveDeviationAlarmType_EventId = 10369,
    NonExclusiveDeviationAlarmType_EventType = 10370,
    NonExclusiveDeviationAlarmType_SourceNode = 10371,
    NonExclusiveDeviationAlarmType_SourceName = 10372,
    NonExclusiveDeviationAlarmType_Time = 10373,
    NonExclusiveDeviationAlarmType_ReceiveTime = 10374,
    NonExclusiveDeviationAlarmType_LocalTime = 10375,
    NonExclusiveDeviationAlarmType_Message = 10376,
    NonExclusiveDeviationAlarmType_Severity = 10377,
    NonExclusiveDeviationAlarmType_ConditionName = 10378,
    NonExclusiveDeviationAlarmType_BranchId = 10379,
    NonExclusiveDeviationAlarmType_Retain = 10380,
    NonExclusiveDeviationAlarmType_EnabledState = 10381,
    NonExclusiveDeviationAlarmType_EnabledState_Id = 10382,
    NonExclusiveDeviationAlarmType_EnabledState_Name = 10383,
    NonExclusiveDeviationAlarmType_EnabledState_Number = 10384,
    NonExclusiveDeviationAlarmType_EnabledState_EffectiveDisplayName = 10385,
    NonExclusiveDeviationAlarmType_EnabledState_TransitionTime = 10386,
    NonExclusiveDeviationAlarmType_EnabledState_EffectiveTransitionTime = 10387,
    NonExclusiveDeviationAlarmType_EnabledState_TrueState = 10388,
    NonExclusiveDeviationAlarmType_EnabledState_FalseState = 10389,
    NonExclusiveDeviationAlarmType_Quality = 10390,
    NonExclusiveDeviationAlarmType_Quality_SourceTimestamp = 10391,
    NonExclusiveDeviationAlarmType_LastSeverity = 10392,
    NonExclusiveDeviationAlarmType_LastSeverity_SourceTimestamp = 10393,
    NonExclusiveDeviationAlarmType_Comment = 10394,
    NonExclusiveDeviationAlarmType_Comment_SourceTimestamp = 10395,
    NonExclusiveDeviationAlarmType_ClientUserId = 10396,
    NonExclusiveDeviationAlarmType_Enable = 10397,
    NonExclusiveDeviationAlarmType_Disable = 10398,
    NonExclusiveDeviationAlarmType_AddComment = 10399,
    NonExclusiveDeviationAlarmType_AddComment_InputArguments = 10400,
    NonExclusiveDeviationAlarmType_ConditionRefresh = 10401,
    NonExclusiveDeviationAlarmType_ConditionRefresh_InputArguments = 10402,
    NonExclusiveDeviationAlarmType_AckedState = 10403,
    NonExclusiveDeviationAlarmType_AckedState_Id = 10404,
    NonExclusiveDeviationAlarmType_AckedState_Name = 10405,
    NonExclusiveDeviationAlarmType_AckedState_Number = 10406,
    NonExclusiveDeviationAlarmType_AckedState_EffectiveDisplayName = 10407,
    NonExclusiveDeviationAlarmType_AckedState_TransitionTime = 10408,
    NonExclusiveDeviationAlarmType_AckedState_EffectiveTransitionTime = 10409,
    NonExclusiveDeviationAlarmType_AckedState_TrueState = 10410,
    NonExclusiveDeviationAlarmType_AckedState_FalseState = 10411,
    NonExclusiveDeviationAlarmType_ConfirmedState = 10412,
    NonExclusiveDeviationAlarmType_ConfirmedState_Id = 10413,
    NonExclusiveDeviationAlarmType_ConfirmedState_Name = 10414,
    NonExclusiveDeviationAlarmType_ConfirmedState_Number = 10415,
    NonExclusiveDeviationAlarmType_ConfirmedState_EffectiveDisplayName = 10416,
    NonExclusiveDeviationAlarmType_ConfirmedState_TransitionTime = 10417,
    NonExclusiveDeviationAlarmType_ConfirmedState_EffectiveTransitionTime = 10418,
    NonExclusiveDeviationAlarmType_ConfirmedState_TrueState = 10419,
    NonExclusiveDeviationAlarmType_ConfirmedState_FalseState = 10420,
    NonExclusiveDeviationAlarmType_Acknowledge = 10421,
    NonExclusiveDeviationAlarmType_Acknowledge_InputArguments = 10422,
    NonExclusiveDeviationAlarmType_Confirm = 10423,
    NonExclusiveDeviationAlarmType_Confirm_InputArguments = 10424,
    NonExclusiveDeviationAlarmType_ActiveState = 10425,
    NonExclusiveDeviationAlarmType_ActiveState_Id = 10426,
    NonExclusiveDeviationAlarmType_ActiveState_Name = 10427,
    NonExclusiveDeviationAlarmType_ActiveState_Number = 10428,
    NonExclusiveDeviationAlarmType_ActiveState_EffectiveDisplayName = 10429,
    NonExclusiveDeviationAlarmType_ActiveState_TransitionTime = 10430,
    NonExclusiveDeviationAlarmType_ActiveState_EffectiveTransitionTime = 10431,
    NonExclusiveDeviationAlarmType_ActiveState_TrueState = 10432,
    NonExclusiveDeviationAlarmType_ActiveState_FalseState = 10433,
    NonExclusiveDeviationAlarmType_SuppressedState = 10434,
    NonExclusiveDeviationAlarmType_SuppressedState_Id = 10435,
    NonExclusiveDeviationAlarmType_SuppressedState_Name = 10436,
    NonExclusiveDeviationAlarmType_SuppressedState_Number = 10437,
    NonExclusiveDeviationAlarmType_SuppressedState_EffectiveDisplayName = 10438,
    NonExclusiveDeviationAlarmType_SuppressedState_TransitionTime = 10439,
    NonExclusiveDeviationAlarmType_SuppressedState_EffectiveTransitionTime = 10440,
    NonExclusiveDeviationAlarmType_SuppressedState_TrueState = 10441,
    NonExclusiveDeviationAlarmType_SuppressedState_FalseState = 10442,
    NonExclusiveDeviationAlarmType_ShelvingState = 10443,
    NonExclusiveDeviationAlarmType_ShelvingState_CurrentState = 10444,
    NonExclusiveDeviationAlarmType_ShelvingState_CurrentState_Id = 10445,
    NonExclusiveDeviationAlarmType_ShelvingState_CurrentState_Name = 10446,
    NonExclusiveDeviationAlarmType_ShelvingState_CurrentState_Number = 10447,
    NonExclusiveDeviationAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 10448,
    NonExclusiveDeviationAlarmType_ShelvingState_LastTransition = 10449,
    NonExclusiveDeviationAlarmType_ShelvingState_LastTransition_Id = 10450,
    NonExclusiveDeviationAlarmType_ShelvingState_LastTransition_Name = 10451,
    NonExclusiveDeviationAlarmType_ShelvingState_LastTransition_Number = 10452,
    NonExclusiveDeviationAlarmType_ShelvingState_LastTransition_TransitionTime = 10453,
    NonExclusiveDeviationAlarmType_ShelvingState_UnshelveTime = 10454,
    NonExclusiveDeviationAlarmType_ShelvingState_Unshelve = 10476,
    NonExclusiveDeviationAlarmType_ShelvingState_OneShotShelve = 10477,
    NonExclusiveDeviationAlarmType_ShelvingState_TimedShelve = 10478,
    NonExclusiveDeviationAlarmType_ShelvingState_TimedShelve_InputArguments = 10479,
    NonExclusiveDeviationAlarmType_SuppressedOrShelved = 10480,
    NonExclusiveDeviationAlarmType_MaxTimeShelved = 10481,
    NonExclusiveDeviationAlarmType_HighHighState = 10482,
    NonExclusiveDeviationAlarmType_HighHighState_Id = 10483,
    NonExclusiveDeviationAlarmType_HighHighState_Name = 10484,
    NonExclusiveDeviationAlarmType_HighHighState_Number = 10485,
    NonExclusiveDeviationAlarmType_HighHighState_EffectiveDisplayName = 10486,
    NonExclusiveDeviationAlarmType_HighHighState_TransitionTime = 10487,
    NonExclusiveDeviationAlarmType_HighHighState_EffectiveTransitionTime = 10488,
    NonExclusiveDeviationAlarmType_HighHighState_TrueState = 10489,
    NonExclusiveDeviationAlarmType_HighHighState_FalseState = 10490,
    NonExclusiveDeviationAlarmType_HighState = 10491,
    NonExclusiveDeviationAlarmType_HighState_Id = 10492,
    NonExclusiveDeviationAlarmType_HighState_Name = 10493,
    NonExclusiveDeviationAlarmType_HighState_Number = 10494,
    NonExclusiveDeviationAlarmType_HighState_EffectiveDisplayName = 10495,
    NonExclusiveDeviationAlarmType_HighState_TransitionTime = 10496,
    NonExclusiveDeviationAlarmType_HighState_EffectiveTransitionTime = 10497,
    NonExclusiveDeviationAlarmType_HighState_TrueState = 10498,
    NonExclusiveDeviationAlarmType_HighState_FalseState = 10499,
    NonExclusiveDeviationAlarmType_LowState = 10500,
    NonExclusiveDeviationAlarmType_LowState_Id = 10501,
    NonExclusiveDeviationAlarmType_LowState_Name = 10502,
    NonExclusiveDeviationAlarmType_LowState_Number = 10503,
    NonExclusiveDeviationAlarmType_LowState_EffectiveDisplayName = 10504,
    NonExclusiveDeviationAlarmType_LowState_TransitionTime = 10505,
    NonExclusiveDeviationAlarmType_LowState_EffectiveTransitionTime = 10506,
    NonExclusiveDeviationAlarmType_LowState_TrueState = 10507,
    NonExclusiveDeviationAlarmType_LowState_FalseState = 10508,
    NonExclusiveDeviationAlarmType_LowLowState = 10509,
    NonExclusiveDeviationAlarmType_LowLowState_Id = 10510,
    NonExclusiveDeviationAlarmType_LowLowState_Name = 10511,
    NonExclusiveDeviationAlarmType_LowLowState_Number = 10512,
    NonExclusiveDeviationAlarmType_LowLowState_EffectiveDisplayName = 10513,
    NonExclusiveDeviationAlarmType_LowLowState_TransitionTime = 10514,
    NonExclusiveDeviationAlarmType_LowLowState_EffectiveTransitionTime = 10515,
    NonExclusiveDeviationAlarmType_LowLowState_TrueState = 10516,
    NonExclusiveDeviationAlarmType_LowLowState_FalseState = 10517,
    NonExclusiveDeviationAlarmType_HighHighLimit = 10518,
    NonExclusiveDeviationAlarmType_HighLimit = 10519,
    NonExclusiveDeviationAlarmType_LowLimit = 10520,
    NonExclusiveDeviationAlarmType_LowLowLimit = 10521,
    NonExclusiveDeviationAlarmType_SetpointNode = 10522,
    DiscreteAlarmType = 10523,
    DiscreteAlarmType_EventId = 10524,
    DiscreteAlarmType_EventType = 10525,
    DiscreteAlarmType_SourceNode = 10526,
    DiscreteAlarmType_SourceName = 10527,
    DiscreteAlarmType_Time = 10528,
    DiscreteAlarmType_ReceiveTime = 10529,
    DiscreteAlarmType_LocalTime = 10530,
    DiscreteAlarmType_Message = 10531,
    DiscreteAlarmType_Severity = 10532,
    DiscreteAlarmType_ConditionName = 10533,
    DiscreteAlarmType_BranchId = 10534,
    DiscreteAlarmType_Retain = 10535,
    DiscreteAlarmType_EnabledState = 10536,
    DiscreteAlarmType_EnabledState_Id = 10537,
    DiscreteAlarmType_EnabledState_Name = 10538,
    DiscreteAlarmType_EnabledState_Number = 10539,
    DiscreteAlarmType_EnabledState_EffectiveDisplayName = 10540,
    DiscreteAlarmType_EnabledState_TransitionTime = 10541,
    DiscreteAlarmType_EnabledState_EffectiveTransitionTime = 10542,
    DiscreteAlarmType_EnabledState_TrueState = 10543,
    DiscreteAlarmType_EnabledState_FalseState = 10544,
    DiscreteAlarmType_Quality = 10545,
    DiscreteAlarmType_Quality_SourceTimestamp = 10546,
    DiscreteAlarmType_LastSeverity = 10547,
    DiscreteAlarmType_LastSeverity_SourceTimestamp = 10548,
    DiscreteAlarmType_Comment = 10549,
    DiscreteAlarmType_Comment_SourceTimestamp = 10550,
    DiscreteAlarmType_ClientUserId = 10551,
    DiscreteAlarmType_Enable = 10552,
    DiscreteAlarmType_Disable = 10553,
    DiscreteAlarmType_AddComment = 10554,
    DiscreteAlarmType_AddComment_InputArguments = 10555,
    DiscreteAlarmType_ConditionRefresh = 10556,
    DiscreteAlarmType_ConditionRefresh_InputArguments = 10557,
    DiscreteAlarmType_AckedState = 10558,
    DiscreteAlarmType_AckedState_Id = 10559,
    DiscreteAlarmType_AckedState_Name = 10560,
    DiscreteAlarmType_AckedState_Number = 10561,
    DiscreteAlarmType_AckedState_EffectiveDisplayName = 10562,
    DiscreteAlarmType_AckedState_TransitionTime = 10563,
    DiscreteAlarmType_AckedState_EffectiveTransitionTime = 10564,
    DiscreteAlarmType_AckedState_TrueState = 10565,
    DiscreteAlarmType_AckedState_FalseState = 10566,
    DiscreteAlarmType_ConfirmedState = 10567,
    DiscreteAlarmType_ConfirmedState_Id = 10568,
    DiscreteAlarmType_ConfirmedState_Name = 10569,
    DiscreteAlarmType_ConfirmedState_Number = 10570,
    DiscreteAlarmType_ConfirmedState_EffectiveDisplayName = 10571,
    DiscreteAlarmType_ConfirmedState_TransitionTime = 10572,
    DiscreteAlarmType_ConfirmedState_EffectiveTransitionTime = 10573,
    DiscreteAlarmType_ConfirmedState_TrueState = 10574,
    DiscreteAlarmType_ConfirmedState_FalseState = 10575,
    DiscreteAlarmType_Acknowledge = 10576,
    DiscreteAlarmType_Acknowledge_InputArguments = 10577,
    DiscreteAlarmType_Confirm = 10578,
    DiscreteAlarmType_Confirm_InputArguments = 10579,
    DiscreteAlarmType_ActiveState = 10580,
    DiscreteAlarmType_ActiveState_Id = 10581,
    DiscreteAlarmType_ActiveState_Name = 10582,
    DiscreteAlarmType_ActiveState_Number = 10583,
    DiscreteAlarmType_ActiveState_EffectiveDisplayName = 10584,
    DiscreteAlarmType_ActiveState_TransitionTime = 10585,
    DiscreteAlarmType_ActiveState_EffectiveTransitionTime = 10586,
    DiscreteAlarmType_ActiveState_TrueState = 10587,
    DiscreteAlarmType_ActiveState_FalseState = 10588,
    DiscreteAlarmType_SuppressedState = 10589,
    DiscreteAlarmType_SuppressedState_Id = 10590,
    DiscreteAlarmType_SuppressedState_Name = 10591,
    DiscreteAlarmType_SuppressedState_Number = 10592,
    DiscreteAlarmType_SuppressedState_EffectiveDisplayName = 10593,
    DiscreteAlarmType_SuppressedState_TransitionTime = 10594,
    DiscreteAlarmType_SuppressedState_EffectiveTransitionTime = 10595,
    DiscreteAlarmType_SuppressedState_TrueState = 10596,
    DiscreteAlarmType_SuppressedState_FalseState = 10597,
    DiscreteAlarmType_ShelvingState = 10598,
    DiscreteAlarmType_ShelvingState_CurrentState = 10599,
    DiscreteAlarmType_ShelvingState_CurrentState_Id = 10600,
    DiscreteAlarmType_ShelvingState_CurrentState_Name = 10601,
    DiscreteAlarmType_ShelvingState_CurrentState_Number = 10602,
    DiscreteAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 10603,
    DiscreteAlarmType_ShelvingState_LastTransition = 10604,
    DiscreteAlarmType_ShelvingState_LastTransition_Id = 10605,
    DiscreteAlarmType_ShelvingState_LastTransition_Name = 10606,
    DiscreteAlarmType_ShelvingState_LastTransition_Number = 10607,
    DiscreteAlarmType_ShelvingState_LastTransition_TransitionTime = 10608,
    DiscreteAlarmType_ShelvingState_UnshelveTime = 10609,
    DiscreteAlarmType_ShelvingState_Unshelve = 10631,
    DiscreteAlarmType_ShelvingState_OneShotShelve = 10632,
    DiscreteAlarmType_ShelvingState_TimedShelve = 10633,
    DiscreteAlarmType_ShelvingState_TimedShelve_InputArguments = 10634,
    DiscreteAlarmType_SuppressedOrShelved = 10635,
    DiscreteAlarmType_MaxTimeShelved = 10636,
    OffNormalAlarmType = 10637,
    OffNormalAlarmType_EventId = 10638,
    OffNormalAlarmType_EventType = 10639,
    OffNormalAlarmType_SourceNode = 10640,
    OffNormalAlarmType_SourceName = 10641,
    OffNormalAlarmType_Time = 10642,
    OffNormalAlarmType_ReceiveTime = 10643,
    OffNormalAlarmType_LocalTime = 10644,
    OffNormalAlarmType_Message = 10645,
    OffNormalAlarmType_Severity = 10646,
    OffNormalAlarmType_ConditionName = 10647,
    OffNormalAlarmType_BranchId = 10648,
    OffNormalAlarmType_Retain = 10649,
    OffNormalAlarmType_EnabledState = 10650,
    OffNormalAlarmType_EnabledState_Id = 10651,
    OffNormalAlarmType_EnabledState_Name = 10652,
    OffNormalAlarmType_EnabledState_Number = 10653,
    OffNormalAlarmType_EnabledState_EffectiveDisplayName = 10654,
    OffNormalAlarmType_EnabledState_TransitionTime = 10655,
    OffNormalAlarmType_EnabledState_EffectiveTransitionTime = 10656,
    OffNormalAlarmType_EnabledState_TrueState = 10657,
    OffNormalAlarmType_EnabledState_FalseState = 10658,
    OffNormalAlarmType_Quality = 10659,
    OffNormalAlarmType_Quality_SourceTimestamp = 10660,
    OffNormalAlarmType_LastSeverity = 10661,
    OffNormalAlarmType_LastSeverity_SourceTimestamp = 10662,
    OffNormalAlarmType_Comment = 10663,
    OffNormalAlarmType_Comment_SourceTimestamp = 10664,
    OffNormalAlarmType_ClientUserId = 10665,
    OffNormalAlarmType_Enable = 10666,
    OffNormalAlarmType_Disable = 10667,
    OffNormalAlarmType_AddComment = 10668,
    OffNormalAlarmType_AddComment_InputArguments = 10669,
    OffNormalAlarmType_ConditionRefresh = 10670,
    OffNormalAlarmType_ConditionRefresh_InputArguments = 10671,
    OffNormalAlarmType_AckedState = 10672,
    OffNormalAlarmType_AckedState_Id = 10673,
    OffNormalAlarmType_AckedState_Name = 10674,
    OffNormalAlarmType_AckedState_Number = 10675,
    OffNormalAlarmType_AckedState_EffectiveDisplayName = 10676,
    OffNormalAlarmType_AckedState_TransitionTime = 10677,
    OffNormalAlarmType_AckedState_EffectiveTransitionTime = 10678,
    OffNormalAlarmType_AckedState_TrueState = 10679,
    OffNormalAlarmType_AckedState_FalseState = 10680,
    OffNormalAlarmType_ConfirmedState = 10681,
    OffNormalAlarmType_ConfirmedState_Id = 10682,
    OffNormalAlarmType_ConfirmedState_Name = 10683,
    OffNormalAlarmType_ConfirmedState_Number = 10684,
    OffNormalAlarmType_ConfirmedState_EffectiveDisplayName = 10685,
    OffNormalAlarmType_ConfirmedState_TransitionTime = 10686,
    OffNormalAlarmType_ConfirmedState_EffectiveTransitionTime = 10687,
    OffNormalAlarmType_ConfirmedState_TrueState = 10688,
    OffNormalAlarmType_ConfirmedState_FalseState = 10689,
    OffNormalAlarmType_Acknowledge = 10690,
    OffNormalAlarmType_Acknowledge_InputArguments = 10691,
    OffNormalAlarmType_Confirm = 10692,
    OffNormalAlarmType_Confirm_InputArguments = 10693,
    OffNormalAlarmType_ActiveState = 10694,
    OffNormalAlarmType_ActiveState_Id = 10695,
    OffNormalAlarmType_ActiveState_Name = 10696,
    OffNormalAlarmType_ActiveState_Number = 10697,
    OffNormalAlarmType_ActiveState_EffectiveDisplayName = 10698,
    OffNormalAlarmType_ActiveState_TransitionTime = 10699,
    OffNormalAlarmType_ActiveState_EffectiveTransitionTime = 10700,
    OffNormalAlarmType_ActiveState_TrueState = 10701,
    OffNormalAlarmType_ActiveState_FalseState = 10702,
    OffNormalAlarmType_SuppressedState = 10703,
    OffNormalAlarmType_SuppressedState_Id = 10704,
    OffNormalAlarmType_SuppressedState_Name = 10705,
    OffNormalAlarmType_SuppressedState_Number = 10706,
    OffNormalAlarmType_SuppressedState_EffectiveDisplayName = 10707,
    OffNormalAlarmType_SuppressedState_TransitionTime = 10708,
    OffNormalAlarmType_SuppressedState_EffectiveTransitionTime = 10709,
    OffNormalAlarmType_SuppressedState_TrueState = 10710,
    OffNormalAlarmType_SuppressedState_FalseState = 10711,
    OffNormalAlarmType_ShelvingState = 10712,
    OffNormalAlarmType_ShelvingState_CurrentState = 10713,
    OffNormalAlarmType_ShelvingState_CurrentState_Id = 10714,
    OffNormalAlarmType_ShelvingState_CurrentState_Name = 10715,
    OffNormalAlarmType_ShelvingState_CurrentState_Number = 10716,
    OffNormalAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 10717,
    OffNormalAlarmType_ShelvingState_LastTransition = 10718,
    OffNormalAlarmType_ShelvingState_LastTransition_Id = 10719,
    OffNormalAlarmType_ShelvingState_LastTransition_Name = 10720,
    OffNormalAlarmType_ShelvingState_LastTransition_Number = 10721,
    OffNormalAlarmType_ShelvingState_LastTransition_TransitionTime = 10722,
    OffNormalAlarmType_ShelvingState_UnshelveTime = 10723,
    OffNormalAlarmType_ShelvingState_Unshelve = 10745,
    OffNormalAlarmType_ShelvingState_OneShotShelve = 10746,
    OffNormalAlarmType_ShelvingState_TimedShelve = 10747,
    OffNormalAlarmType_ShelvingState_TimedShelve_InputArguments = 10748,
    OffNormalAlarmType_SuppressedOrShelved = 10749,
    OffNormalAlarmType_MaxTimeShelved = 10750,
    TripAlarmType = 10751,
    TripAlarmType_EventId = 10752,
    TripAlarmType_EventType = 10753,
    TripAlarmType_SourceNode = 10754,
    TripAlarmType_SourceName = 10755,
    TripAlarmType_Time = 10756,
    TripAlarmType_ReceiveTime = 10757,
    TripAlarmType_LocalTime = 10758,
    TripAlarmType_Message = 10759,
    TripAlarmType_Severity = 10760,
    TripAlarmType_ConditionName = 10761,
    TripAlarmType_BranchId = 10762,
    TripAlarmType_Retain = 10763,
    TripAlarmType_EnabledState = 10764,
    TripAlarmType_EnabledState_Id = 10765,
    TripAlarmType_EnabledState_Name = 10766,
    TripAlarmType_EnabledState_Number = 10767,
    TripAlarmType_EnabledState_EffectiveDisplayName = 10768,
    TripAlarmType_EnabledState_TransitionTime = 10769,
    TripAlarmType_EnabledState_EffectiveTransitionTime = 10770,
    TripAlarmType_EnabledState_TrueState = 10771,
    TripAlarmType_EnabledState_FalseState = 10772,
    TripAlarmType_Quality = 10773,
    TripAlarmType_Quality_SourceTimestamp = 10774,
    TripAlarmType_LastSeverity = 10775,
    TripAlarmType_LastSeverity_SourceTimestamp = 10776,
    TripAlarmType_Comment = 10777,
    TripAlarmType_Comment_SourceTimestamp = 10778,
    TripAlarmType_ClientUserId = 10779,
    TripAlarmType_Enable = 10780,
    TripAlarmType_Disable = 10781,
    TripAlarmType_AddComment = 10782,
    TripAlarmType_AddComment_InputArguments = 10783,
    TripAlarmType_ConditionRefresh = 10784,
    TripAlarmType_ConditionRefresh_InputArguments = 10785,
    TripAlarmType_AckedState = 10786,
    TripAlarmType_AckedState_Id = 10787,
    TripAlarmType_AckedState_Name = 10788,
    TripAlarmType_AckedState_Number = 10789,
    TripAlarmType_AckedState_EffectiveDisplayName = 10790,
    TripAlarmType_AckedState_TransitionTime = 10791,
    TripAlarmType_AckedState_EffectiveTransitionTime = 10792,
    TripAlarmType_AckedState_TrueState = 10793,
    TripAlarmType_AckedState_FalseState = 10794,
    TripAlarmType_ConfirmedState = 10795,
    TripAlarmType_ConfirmedState_Id = 10796,
    TripAlarmType_ConfirmedState_Name = 10797,
    TripAlarmType_ConfirmedState_Number = 10798,
    TripAlarmType_ConfirmedState_EffectiveDisplayName = 10799,
    TripAlarmType_ConfirmedState_TransitionTime = 10800,
    TripAlarmType_ConfirmedState_EffectiveTransitionTime = 10801,
    TripAlarmType_ConfirmedState_TrueState = 10802,
    TripAlarmType_ConfirmedState_FalseState = 10803,
    TripAlarmType_Acknowledge = 10804,
    TripAlarmType_Acknowledge_InputArguments = 10805,
    TripAlarmType_Confirm = 10806,
    TripAlarmType_Confirm_InputArguments = 10807,
    TripAlarmType_ActiveState = 10808,
    TripAlarmType_ActiveState_Id = 10809,
    TripAlarmType_ActiveState_Name = 10810,
    TripAlarmType_ActiveState_Number = 10811,
    TripAlarmType_ActiveState_EffectiveDisplayName = 10812,
    TripAlarmType_ActiveState_TransitionTime = 10813,
    TripAlarmType_ActiveState_EffectiveTransitionTime = 10814,
    TripAlarmType_ActiveState_TrueState = 10815,
    TripAlarmType_ActiveState_FalseState = 10816,
    TripAlarmType_SuppressedState = 10817,
    TripAlarmType_SuppressedState_Id = 10818,
    TripAlarmType_SuppressedState_Name = 10819,
    TripAlarmType_SuppressedState_Number = 10820,
    TripAlarmType_SuppressedState_EffectiveDisplayName = 10821,
    TripAlarmType_SuppressedState_TransitionTime = 10822,
    TripAlarmType_SuppressedState_EffectiveTransitionTime = 10823,
    TripAlarmType_SuppressedState_TrueState = 10824,
    TripAlarmType_SuppressedState_FalseState = 10825,
    TripAlarmType_ShelvingState = 10826,
    TripAlarmType_ShelvingState_CurrentState = 10827,
    TripAlarmType_ShelvingState_CurrentState_Id = 10828,
    TripAlarmType_ShelvingState_CurrentState_Name = 10829,
    TripAlarmType_ShelvingState_CurrentState_Number = 10830,
    TripAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 10831,
    TripAlarmType_ShelvingState_LastTransition = 10832,
    TripAlarmType_ShelvingState_LastTransition_Id = 10833,
    TripAlarmType_ShelvingState_LastTransition_Name = 10834,
    TripAlarmType_ShelvingState_LastTransition_Number = 10835,
    TripAlarmType_ShelvingState_LastTransition_TransitionTime = 10836,
    TripAlarmType_ShelvingState_UnshelveTime = 10837,
    TripAlarmType_ShelvingState_Unshelve = 10859,
    TripAlarmType_ShelvingState_OneShotShelve = 10860,
    TripAlarmType_ShelvingState_TimedShelve = 10861,
    TripAlarmType_ShelvingState_TimedShelve_InputArguments = 10862,
    TripAlarmType_SuppressedOrShelved = 10863,
    TripAlarmType_MaxTimeShelved = 10864,
    AuditConditionShelvingEventType = 11093,
    AuditConditionShelvingEventType_EventId = 11094,
    AuditConditionShelvingEventType_EventType = 11095,
    AuditConditionShelvingEventType_SourceNode = 11096,
    AuditConditionShelvingEventType_SourceName = 11097,
    AuditConditionShelvingEventType_Time = 11098,
    AuditConditionShelvingEventType_ReceiveTime = 11099,
    AuditConditionShelvingEventType_LocalTime = 11100,
    AuditConditionShelvingEventType_Message = 11101,
    AuditConditionShelvingEventType_Severity = 11102,
    AuditConditionShelvingEventType_ActionTimeStamp = 11103,
    AuditConditionShelvingEventType_Status = 11104,
    AuditConditionShelvingEventType_ServerId = 11105,
    AuditConditionShelvingEventType_ClientAuditEntryId = 11106,
    AuditConditionShelvingEventType_ClientUserId = 11107,
    AuditConditionShelvingEventType_MethodId = 11108,
    AuditConditionShelvingEventType_InputArguments = 11109,
    TwoStateVariableType_TrueState = 11110,
    TwoStateVariableType_FalseState = 11111,
    ConditionType_ConditionClassId = 11112,
    ConditionType_ConditionClassName = 11113,
    DialogConditionType_ConditionClassId = 11114,
    DialogConditionType_ConditionClassName = 11115,
    AcknowledgeableConditionType_ConditionClassId = 11116,
    AcknowledgeableConditionType_ConditionClassName = 11117,
    AlarmConditionType_ConditionClassId = 11118,
    AlarmConditionType_ConditionClassName = 11119,
    AlarmConditionType_InputNode = 11120,
    LimitAlarmType_ConditionClassId = 11121,
    LimitAlarmType_ConditionClassName = 11122,
    LimitAlarmType_InputNode = 11123,
    LimitAlarmType_HighHighLimit = 11124,
    LimitAlarmType_HighLimit = 11125,
    LimitAlarmType_LowLimit = 11126,
    LimitAlarmType_LowLowLimit = 11127,
    ExclusiveLimitAlarmType_ConditionClassId = 11128,
    ExclusiveLimitAlarmType_ConditionClassName = 11129,
    ExclusiveLimitAlarmType_InputNode = 11130,
    ExclusiveLevelAlarmType_ConditionClassId = 11131,
    ExclusiveLevelAlarmType_ConditionClassName = 11132,
    ExclusiveLevelAlarmType_InputNode = 11133,
    ExclusiveRateOfChangeAlarmType_ConditionClassId = 11134,
    ExclusiveRateOfChangeAlarmType_ConditionClassName = 11135,
    ExclusiveRateOfChangeAlarmType_InputNode = 11136,
    ExclusiveDeviationAlarmType_ConditionClassId = 11137,
    ExclusiveDeviationAlarmType_ConditionClassName = 11138,
    ExclusiveDeviationAlarmType_InputNode = 11139,
    NonExclusiveLimitAlarmType_ConditionClassId = 11140,
    NonExclusiveLimitAlarmType_ConditionClassName = 11141,
    NonExclusiveLimitAlarmType_InputNode = 11142,
    NonExclusiveLevelAlarmType_ConditionClassId = 11143,
    NonExclusiveLevelAlarmType_ConditionClassName = 11144,
    NonExclusiveLevelAlarmType_InputNode = 11145,
    NonExclusiveRateOfChangeAlarmType_ConditionClassId = 11146,
    NonExclusiveRateOfChangeAlarmType_ConditionClassName = 11147,
    NonExclusiveRateOfChangeAlarmType_InputNode = 11148,
    NonExclusiveDeviationAlarmType_ConditionClassId = 11149,
    NonExclusiveDeviationAlarmType_ConditionClassName = 11150,
    NonExclusiveDeviationAlarmType_InputNode = 11151,
    DiscreteAlarmType_ConditionClassId = 11152,
    DiscreteAlarmType_ConditionClassName = 11153,
    DiscreteAlarmType_InputNode = 11154,
    OffNormalAlarmType_ConditionClassId = 11155,
    OffNormalAlarmType_ConditionClassName = 11156,
    OffNormalAlarmType_InputNode = 11157,
    OffNormalAlarmType_NormalState = 11158,
    TripAlarmType_ConditionClassId = 11159,
    TripAlarmType_ConditionClassName = 11160,
    TripAlarmType_InputNode = 11161,
    TripAlarmType_NormalState = 11162,
    BaseConditionClassType = 11163,
    ProcessConditionClassType = 11164,
    MaintenanceConditionClassType = 11165,
    SystemConditionClassType = 11166,
    HistoricalDataConfigurationType_AggregateConfiguration_TreatUncertainAsBad = 11168,
    HistoricalDataConfigurationType_AggregateConfiguration_PercentDataBad = 11169,
    HistoricalDataConfigurationType_AggregateConfiguration_PercentDataGood = 11170,
    HistoricalDataConfigurationType_AggregateConfiguration_UseSlopedExtrapolation = 11171,
    HistoryServerCapabilitiesType_AggregateFunctions = 11172,
    AggregateConfigurationType = 11187,
    AggregateConfigurationType_TreatUncertainAsBad = 11188,
    AggregateConfigurationType_PercentDataBad = 11189,
    AggregateConfigurationType_PercentDataGood = 11190,
    AggregateConfigurationType_UseSlopedExtrapolation = 11191,
    HistoryServerCapabilities = 11192,
    HistoryServerCapabilities_AccessHistoryDataCapability = 11193,
    HistoryServerCapabilities_InsertDataCapability = 11196,
    HistoryServerCapabilities_ReplaceDataCapability = 11197,
    HistoryServerCapabilities_UpdateDataCapability = 11198,
    HistoryServerCapabilities_DeleteRawCapability = 11199,
    HistoryServerCapabilities_DeleteAtTimeCapability = 11200,
    HistoryServerCapabilities_AggregateFunctions = 11201,
    HAConfiguration = 11202,
    HAConfiguration_AggregateConfiguration = 11203,
    HAConfiguration_AggregateConfiguration_TreatUncertainAsBad = 11204,
    HAConfiguration_AggregateConfiguration_PercentDataBad = 11205,
    HAConfiguration_AggregateConfiguration_PercentDataGood = 11206,
    HAConfiguration_AggregateConfiguration_UseSlopedExtrapolation = 11207,
    HAConfiguration_Stepped = 11208,
    HAConfiguration_Definition = 11209,
    HAConfiguration_MaxTimeInterval = 11210,
    HAConfiguration_MinTimeInterval = 11211,
    HAConfiguration_ExceptionDeviation = 11212,
    HAConfiguration_ExceptionDeviationFormat = 11213,
    Annotations = 11214,
    HistoricalEventFilter = 11215,
    ModificationInfo = 11216,
    HistoryModifiedData = 11217,
    ModificationInfo_Encoding_DefaultXml = 11218,
    HistoryModifiedData_Encoding_DefaultXml = 11219,
    ModificationInfo_Encoding_DefaultBinary = 11226,
    HistoryModifiedData_Encoding_DefaultBinary = 11227,
    HistoryUpdateType = 11234,
    MultiStateValueDiscreteType = 11238,
    MultiStateValueDiscreteType_Definition = 11239,
    MultiStateValueDiscreteType_ValuePrecision = 11240,
    MultiStateValueDiscreteType_EnumValues = 11241,
    HistoryServerCapabilities_AccessHistoryEventsCapability = 11242,
    HistoryServerCapabilitiesType_MaxReturnDataValues = 11268,
    HistoryServerCapabilitiesType_MaxReturnEventValues = 11269,
    HistoryServerCapabilitiesType_InsertAnnotationCapability = 11270,
    HistoryServerCapabilities_MaxReturnDataValues = 11273,
    HistoryServerCapabilities_MaxReturnEventValues = 11274,
    HistoryServerCapabilities_InsertAnnotationCapability = 11275,
    HistoryServerCapabilitiesType_InsertEventCapability = 11278,
    HistoryServerCapabilitiesType_ReplaceEventCapability = 11279,
    HistoryServerCapabilitiesType_UpdateEventCapability = 11280,
    HistoryServerCapabilities_InsertEventCapability = 11281,
    HistoryServerCapabilities_ReplaceEventCapability = 11282,
    HistoryServerCapabilities_UpdateEventCapability = 11283,
    AggregateFunction_TimeAverage2 = 11285,
    AggregateFunction_Minimum2 = 11286,
    AggregateFunction_Maximum2 = 11287,
    AggregateFunction_Range2 = 11288,
    AggregateFunction_WorstQuality2 = 11292,
    PerformUpdateType = 11293,
    UpdateStructureDataDetails = 11295,
    UpdateStructureDataDetails_Encoding_DefaultXml = 11296,
    UpdateStructureDataDetails_Encoding_DefaultBinary = 11300,
    AggregateFunction_Total2 = 11304,
    AggregateFunction_MinimumActualTime2 = 11305,
    AggregateFunction_MaximumActualTime2 = 11306,
    AggregateFunction_DurationInStateZero = 11307,
    AggregateFunction_DurationInStateNonZero = 11308,
    Server_ServerRedundancy_CurrentServerId = 11312,
    Server_ServerRedundancy_RedundantServerArray = 11313,
    Server_ServerRedundancy_ServerUriArray = 11314,
    ShelvedStateMachineType_UnshelvedToTimedShelved_TransitionNumber = 11322,
    ShelvedStateMachineType_UnshelvedToOneShotShelved_TransitionNumber = 11323,
    ShelvedStateMachineType_TimedShelvedToUnshelved_TransitionNumber = 11324,
    ShelvedStateMachineType_TimedShelvedToOneShotShelved_TransitionNumber = 11325,
    ShelvedStateMachineType_OneShotShelvedToUnshelved_TransitionNumber = 11326,
    ShelvedStateMachineType_OneShotShelvedToTimedShelved_TransitionNumber = 11327,
    ExclusiveLimitStateMachineType_LowLowToLow_TransitionNumber = 11340,
    ExclusiveLimitStateMachineType_LowToLowLow_TransitionNumber = 11341,
    ExclusiveLimitStateMachineType_HighHighToHigh_TransitionNumber = 11342,
    ExclusiveLimitStateMachineType_HighToHighHigh_TransitionNumber = 11343,
    AggregateFunction_StandardDeviationSample = 11426,
    AggregateFunction_StandardDeviationPopulation = 11427,
    AggregateFunction_VarianceSample = 11428,
    AggregateFunction_VariancePopulation = 11429,
    EnumStrings = 11432,
    ValueAsText = 11433,
    ProgressEventType = 11436,
    ProgressEventType_EventId = 11437,
    ProgressEventType_EventType = 11438,
    ProgressEventType_SourceNode = 11439,
    ProgressEventType_SourceName = 11440,
    ProgressEventType_Time = 11441,
    ProgressEventType_ReceiveTime = 11442,
    ProgressEventType_LocalTime = 11443,
    ProgressEventType_Message = 11444,
    ProgressEventType_Severity = 11445,
    SystemStatusChangeEventType = 11446,
    SystemStatusChangeEventType_EventId = 11447,
    SystemStatusChangeEventType_EventType = 11448,
    SystemStatusChangeEventType_SourceNode = 11449,
    SystemStatusChangeEventType_SourceName = 11450,
    SystemStatusChangeEventType_Time = 11451,
    SystemStatusChangeEventType_ReceiveTime = 11452,
    SystemStatusChangeEventType_LocalTime = 11453,
    SystemStatusChangeEventType_Message = 11454,
    SystemStatusChangeEventType_Severity = 11455,
    TransitionVariableType_EffectiveTransitionTime = 11456,
    FiniteTransitionVariableType_EffectiveTransitionTime = 11457,
    StateMachineType_LastTransition_EffectiveTransitionTime = 11458,
    FiniteStateMachineType_LastTransition_EffectiveTransitionTime = 11459,
    TransitionEventType_Transition_EffectiveTransitionTime = 11460,
    MultiStateValueDiscreteType_ValueAsText = 11461,
    ProgramTransitionEventType_Transition_EffectiveTransitionTime = 11462,
    ProgramTransitionAuditEventType_Transition_EffectiveTransitionTime = 11463,
    ProgramStateMachineType_LastTransition_EffectiveTransitionTime = 11464,
    ShelvedStateMachineType_LastTransition_EffectiveTransitionTime = 11465,
    AlarmConditionType_ShelvingState_LastTransition_EffectiveTransitionTime = 11466,
    LimitAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11467,
    ExclusiveLimitStateMachineType_LastTransition_EffectiveTransitionTime = 11468,
    ExclusiveLimitAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11469,
    ExclusiveLimitAlarmType_LimitState_LastTransition_EffectiveTransitionTime = 11470,
    ExclusiveLevelAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11471,
    ExclusiveLevelAlarmType_LimitState_LastTransition_EffectiveTransitionTime = 11472,
    ExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11473,
    ExclusiveRateOfChangeAlarmType_LimitState_LastTransition_EffectiveTransitionTime = 11474,
    ExclusiveDeviationAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11475,
    ExclusiveDeviationAlarmType_LimitState_LastTransition_EffectiveTransitionTime = 11476,
    NonExclusiveLimitAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11477,
    NonExclusiveLevelAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11478,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11479,
    NonExclusiveDeviationAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11480,
    DiscreteAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11481,
    OffNormalAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11482,
    TripAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11483,
    AuditActivateSessionEventType_SecureChannelId = 11485,
    OptionSetType = 11487,
    OptionSetType_OptionSetValues = 11488,
    ServerType_GetMonitoredItems = 11489,
    ServerType_GetMonitoredItems_InputArguments = 11490,
    ServerType_GetMonitoredItems_OutputArguments = 11491,
    Server_GetMonitoredItems = 11492,
    Server_GetMonitoredItems_InputArguments = 11493,
    Server_GetMonitoredItems_OutputArguments = 11494,
    GetMonitoredItemsMethodType = 11495,
    GetMonitoredItemsMethodType_InputArguments = 11496,
    GetMonitoredItemsMethodType_OutputArguments = 11497,
    MaxStringLength = 11498,
    HistoricalDataConfigurationType_StartOfArchive = 11499,
    HistoricalDataConfigurationType_StartOfOnlineArchive = 11500,
    HistoryServerCapabilitiesType_DeleteEventCapability = 11501,
    HistoryServerCapabilities_DeleteEventCapability = 11502,
    HAConfiguration_StartOfArchive = 11503,
    HAConfiguration_StartOfOnlineArchive = 11504,
    AggregateFunction_StartBound = 11505,
    AggregateFunction_EndBound = 11506,
    AggregateFunction_DeltaBounds = 11507,
    ModellingRule_OptionalPlaceholder = 11508,
    ModellingRule_OptionalPlaceholder_NamingRule = 11509,
    ModellingRule_MandatoryPlaceholder = 11510,
    ModellingRule_MandatoryPlaceholder_NamingRule = 11511,
    MaxArrayLength = 11512,
    EngineeringUnits = 11513,
    ServerType_ServerCapabilities_MaxArrayLength = 11514,
    ServerType_ServerCapabilities_MaxStringLength = 11515,
    ServerType_ServerCapabilities_OperationLimits = 11516,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerRead = 11517,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerWrite = 11519,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerMethodCall = 11521,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerBrowse = 11522,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerRegisterNodes = 11523,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerTranslateBrowsePathsToNodeIds = 11524,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerNodeManagement = 11525,
    ServerType_ServerCapabilities_OperationLimits_MaxMonitoredItemsPerCall = 11526,
    ServerType_Namespaces = 11527,
    ServerCapabilitiesType_MaxArrayLength = 11549,
    ServerCapabilitiesType_MaxStringLength = 11550,
    ServerCapabilitiesType_OperationLimits = 11551,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerRead = 11552,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerWrite = 11554,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerMethodCall = 11556,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerBrowse = 11557,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerRegisterNodes = 11558,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerTranslateBrowsePathsToNodeIds = 11559,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerNodeManagement = 11560,
    ServerCapabilitiesType_OperationLimits_MaxMonitoredItemsPerCall = 11561,
    ServerCapabilitiesType_VendorCapability_Placeholder = 11562,
    OperationLimitsType = 11564,
    OperationLimitsType_MaxNodesPerRead = 11565,
    OperationLimitsType_MaxNodesPerWrite = 11567,
    OperationLimitsType_MaxNodesPerMethodCall = 11569,
    OperationLimitsType_MaxNodesPerBrowse = 11570,
    OperationLimitsType_MaxNodesPerRegisterNodes = 11571,
    OperationLimitsType_MaxNodesPerTranslateBrowsePathsToNodeIds = 11572,
    OperationLimitsType_MaxNodesPerNodeManagement = 11573,
    OperationLimitsType_MaxMonitoredItemsPerCall = 11574,
    FileType = 11575,
    FileType_Size = 11576,
    FileType_OpenCount = 11579,
    FileType_Open = 11580,
    FileType_Open_InputArguments = 11581,
    FileType_Open_OutputArguments = 11582,
    FileType_Close = 11583,
    FileType_Close_InputArguments = 11584,
    FileType_Read = 11585,
    FileType_Read_InputArguments = 11586,
    FileType_Read_OutputArguments = 11587,
    FileType_Write = 11588,
    FileType_Write_InputArguments = 11589,
    FileType_GetPosition = 11590,
    FileType_GetPosition_InputArguments = 11591,
    FileType_GetPosition_OutputArguments = 11592,
    FileType_SetPosition = 11593,
    FileType_SetPosition_InputArguments = 11594,
    AddressSpaceFileType = 11595,
    AddressSpaceFileType_Size = 11596,
    AddressSpaceFileType_OpenCount = 11599,
    AddressSpaceFileType_Open = 11600,
    AddressSpaceFileType_Open_InputArguments = 11601,
    AddressSpaceFileType_Open_OutputArguments = 11602,
    AddressSpaceFileType_Close = 11603,
    AddressSpaceFileType_Close_InputArguments = 11604,
    AddressSpaceFileType_Read = 11605,
    AddressSpaceFileType_Read_InputArguments = 11606,
    AddressSpaceFileType_Read_OutputArguments = 11607,
    AddressSpaceFileType_Write = 11608,
    AddressSpaceFileType_Write_InputArguments = 11609,
    AddressSpaceFileType_GetPosition = 11610,
    AddressSpaceFileType_GetPosition_InputArguments = 11611,
    AddressSpaceFileType_GetPosition_OutputArguments = 11612,
    AddressSpaceFileType_SetPosition = 11613,
    AddressSpaceFileType_SetPosition_InputArguments = 11614,
    AddressSpaceFileType_ExportNamespace = 11615,
    NamespaceMetadataType = 11616,
    NamespaceMetadataType_NamespaceUri = 11617,
    NamespaceMetadataType_NamespaceVersion = 11618,
    NamespaceMetadataType_NamespacePublicationDate = 11619,
    NamespaceMetadataType_IsNamespaceSubset = 11620,
    NamespaceMetadataType_StaticNodeIdTypes = 11621,
    NamespaceMetadataType_StaticNumericNodeIdRange = 11622,
    NamespaceMetadataType_StaticStringNodeIdPattern = 11623,
    NamespaceMetadataType_NamespaceFile = 11624,
    NamespaceMetadataType_NamespaceFile_Size = 11625,
    NamespaceMetadataType_NamespaceFile_OpenCount = 11628,
    NamespaceMetadataType_NamespaceFile_Open = 11629,
    NamespaceMetadataType_NamespaceFile_Open_InputArguments = 11630,
    NamespaceMetadataType_NamespaceFile_Open_OutputArguments = 11631,
    NamespaceMetadataType_NamespaceFile_Close = 11632,
    NamespaceMetadataType_NamespaceFile_Close_InputArguments = 11633,
    NamespaceMetadataType_NamespaceFile_Read = 11634,
    NamespaceMetadataType_NamespaceFile_Read_InputArguments = 11635,
    NamespaceMetadataType_NamespaceFile_Read_OutputArguments = 11636,
    NamespaceMetadataType_NamespaceFile_Write = 11637,
    NamespaceMetadataType_NamespaceFile_Write_InputArguments = 11638,
    NamespaceMetadataType_NamespaceFile_GetPosition = 11639,
    NamespaceMetadataType_NamespaceFile_GetPosition_InputArguments = 11640,
    NamespaceMetadataType_NamespaceFile_GetPosition_OutputArguments = 11641,
    NamespaceMetadataType_NamespaceFile_SetPosition = 11642,
    NamespaceMetadataType_NamespaceFile_SetPosition_InputArguments = 11643,
    NamespaceMetadataType_NamespaceFile_ExportNamespace = 11644,
    NamespacesType = 11645,
    NamespacesType_NamespaceIdentifier_Placeholder = 11646,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceUri = 11647,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceVersion = 11648,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespacePublicationDate = 11649,
    NamespacesType_NamespaceIdentifier_Placeholder_IsNamespaceSubset = 11650,
    NamespacesType_NamespaceIdentifier_Placeholder_StaticNodeIdTypes = 11651,
    NamespacesType_NamespaceIdentifier_Placeholder_StaticNumericNodeIdRange = 11652,
    NamespacesType_NamespaceIdentifier_Placeholder_StaticStringNodeIdPattern = 11653,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile = 11654,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Size = 11655,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_OpenCount = 11658,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Open = 11659,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Open_InputArguments = 11660,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Open_OutputArguments = 11661,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Close = 11662,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Close_InputArguments = 11663,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Read = 11664,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Read_InputArguments = 11665,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Read_OutputArguments = 11666,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Write = 11667,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Write_InputArguments = 11668,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_GetPosition = 11669,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_GetPosition_InputArguments = 11670,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_GetPosition_OutputArguments = 11671,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_SetPosition = 11672,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_SetPosition_InputArguments = 11673,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_ExportNamespace = 11674,
    SystemStatusChangeEventType_SystemState = 11696,
    SamplingIntervalDiagnosticsType_SampledMonitoredItemsCount = 11697,
    SamplingIntervalDiagnosticsType_MaxSampledMonitoredItemsCount = 11698,
    SamplingIntervalDiagnosticsType_DisabledMonitoredItemsSamplingCount = 11699,
    OptionSetType_BitMask = 11701,
    Server_ServerCapabilities_MaxArrayLength = 11702,
    Server_ServerCapabilities_MaxStringLength = 11703,
    Server_ServerCapabilities_OperationLimits = 11704,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerRead = 11705,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerWrite = 11707,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerMethodCall = 11709,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerBrowse = 11710,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerRegisterNodes = 11711,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerTranslateBrowsePathsToNodeIds = 11712,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerNodeManagement = 11713,
    Server_ServerCapabilities_OperationLimits_MaxMonitoredItemsPerCall = 11714,
    Server_Namespaces = 11715,
    BitFieldMaskDataType = 11737,
    OpenMethodType = 11738,
    OpenMethodType_InputArguments = 11739,
    OpenMethodType_OutputArguments = 11740,
    CloseMethodType = 11741,
    CloseMethodType_InputArguments = 11742,
    ReadMethodType = 11743,
    ReadMethodType_InputArguments = 11744,
    ReadMethodType_OutputArguments = 11745,
    WriteMethodType = 11746,
    WriteMethodType_InputArguments = 11747,
    GetPositionMethodType = 11748,
    GetPositionMethodType_InputArguments = 11749,
    GetPositionMethodType_OutputArguments = 11750,
    SetPositionMethodType = 11751,
    SetPositionMethodType_InputArguments = 11752,
    SystemOffNormalAlarmType = 11753,
    SystemOffNormalAlarmType_EventId = 11754,
    SystemOffNormalAlarmType_EventType = 11755,
    SystemOffNormalAlarmType_SourceNode = 11756,
    SystemOffNormalAlarmType_SourceName = 11757,
    SystemOffNormalAlarmType_Time = 11758,
    SystemOffNormalAlarmType_ReceiveTime = 11759,
    SystemOffNormalAlarmType_LocalTime = 11760,
    SystemOffNormalAlarmType_Message = 11761,
    SystemOffNormalAlarmType_Severity = 11762,
    SystemOffNormalAlarmType_ConditionClassId = 11763,
    SystemOffNormalAlarmType_ConditionClassName = 11764,
    SystemOffNormalAlarmType_ConditionName = 11765,
    SystemOffNormalAlarmType_BranchId = 11766,
    SystemOffNormalAlarmType_Retain = 11767,
    SystemOffNormalAlarmType_EnabledState = 11768,
    SystemOffNormalAlarmType_EnabledState_Id = 11769,
    SystemOffNormalAlarmType_EnabledState_Name = 11770,
    SystemOffNormalAlarmType_EnabledState_Number = 11771,
    SystemOffNormalAlarmType_EnabledState_EffectiveDisplayName = 11772,
    SystemOffNormalAlarmType_EnabledState_TransitionTime = 11773,
    SystemOffNormalAlarmType_EnabledState_EffectiveTransitionTime = 11774,
    SystemOffNormalAlarmType_EnabledState_TrueState = 11775,
    SystemOffNormalAlarmType_EnabledState_FalseState = 11776,
    SystemOffNormalAlarmType_Quality = 11777,
    SystemOffNormalAlarmType_Quality_SourceTimestamp = 11778,
    SystemOffNormalAlarmType_LastSeverity = 11779,
    SystemOffNormalAlarmType_LastSeverity_SourceTimestamp = 11780,
    SystemOffNormalAlarmType_Comment = 11781,
    SystemOffNormalAlarmType_Comment_SourceTimestamp = 11782,
    SystemOffNormalAlarmType_ClientUserId = 11783,
    SystemOffNormalAlarmType_Disable = 11784,
    SystemOffNormalAlarmType_Enable = 11785,
    SystemOffNormalAlarmType_AddComment = 11786,
    SystemOffNormalAlarmType_AddComment_InputArguments = 11787,
    SystemOffNormalAlarmType_ConditionRefresh = 11788,
    SystemOffNormalAlarmType_ConditionRefresh_InputArguments = 11789,
    SystemOffNormalAlarmType_AckedState = 11790,
    SystemOffNormalAlarmType_AckedState_Id = 11791,
    SystemOffNormalAlarmType_AckedState_Name = 11792,
    SystemOffNormalAlarmType_AckedState_Number = 11793,
    SystemOffNormalAlarmType_AckedState_EffectiveDisplayName = 11794,
    SystemOffNormalAlarmType_AckedState_TransitionTime = 11795,
    SystemOffNormalAlarmType_AckedState_EffectiveTransitionTime = 11796,
    SystemOffNormalAlarmType_AckedState_TrueState = 11797,
    SystemOffNormalAlarmType_AckedState_FalseState = 11798,
    SystemOffNormalAlarmType_ConfirmedState = 11799,
    SystemOffNormalAlarmType_ConfirmedState_Id = 11800,
    SystemOffNormalAlarmType_ConfirmedState_Name = 11801,
    SystemOffNormalAlarmType_ConfirmedState_Number = 11802,
    SystemOffNormalAlarmType_ConfirmedState_EffectiveDisplayName = 11803,
    SystemOffNormalAlarmType_ConfirmedState_TransitionTime = 11804,
    SystemOffNormalAlarmType_ConfirmedState_EffectiveTransitionTime = 11805,
    SystemOffNormalAlarmType_ConfirmedState_TrueState = 11806,
    SystemOffNormalAlarmType_ConfirmedState_FalseState = 11807,
    SystemOffNormalAlarmType_Acknowledge = 11808,
    SystemOffNormalAlarmType_Acknowledge_InputArguments = 11809,
    SystemOffNormalAlarmType_Confirm = 11810,
    SystemOffNormalAlarmType_Confirm_InputArguments = 11811,
    SystemOffNormalAlarmType_ActiveState = 11812,
    SystemOffNormalAlarmType_ActiveState_Id = 11813,
    SystemOffNormalAlarmType_ActiveState_Name = 11814,
    SystemOffNormalAlarmType_ActiveState_Number = 11815,
    SystemOffNormalAlarmType_ActiveState_EffectiveDisplayName = 11816,
    SystemOffNormalAlarmType_ActiveState_TransitionTime = 11817,
    SystemOffNormalAlarmType_ActiveState_EffectiveTransitionTime = 11818,
    SystemOffNormalAlarmType_ActiveState_TrueState = 11819,
    SystemOffNormalAlarmType_ActiveState_FalseState = 11820,
    SystemOffNormalAlarmType_InputNode = 11821,
    SystemOffNormalAlarmType_SuppressedState = 11822,
    SystemOffNormalAlarmType_SuppressedState_Id = 11823,
    SystemOffNormalAlarmType_SuppressedState_Name = 11824,
    SystemOffNormalAlarmType_SuppressedState_Number = 11825,
    SystemOffNormalAlarmType_SuppressedState_EffectiveDisplayName = 11826,
    SystemOffNormalAlarmType_SuppressedState_TransitionTime = 11827,
    SystemOffNormalAlarmType_SuppressedState_EffectiveTransitionTime = 11828,
    SystemOffNormalAlarmType_SuppressedState_TrueState = 11829,
    SystemOffNormalAlarmType_SuppressedState_FalseState = 11830,
    SystemOffNormalAlarmType_ShelvingState = 11831,
    SystemOffNormalAlarmType_ShelvingState_CurrentState = 11832,
    SystemOffNormalAlarmType_ShelvingState_CurrentState_Id = 11833,
    SystemOffNormalAlarmType_ShelvingState_CurrentState_Name = 11834,
    SystemOffNormalAlarmType_ShelvingState_CurrentState_Number = 11835,
    SystemOffNormalAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 11836,
    SystemOffNormalAlarmType_ShelvingState_LastTransition = 11837,
    SystemOffNormalAlarmType_ShelvingState_LastTransition_Id = 11838,
    SystemOffNormalAlarmType_ShelvingState_LastTransition_Name = 11839,
    SystemOffNormalAlarmType_ShelvingState_LastTransition_Number = 11840,
    SystemOffNormalAlarmType_ShelvingState_LastTransition_TransitionTime = 11841,
    SystemOffNormalAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 11842,
    SystemOffNormalAlarmType_ShelvingState_UnshelveTime = 11843,
    SystemOffNormalAlarmType_ShelvingState_Unshelve = 11844,
    SystemOffNormalAlarmType_ShelvingState_OneShotShelve = 11845,
    SystemOffNormalAlarmType_ShelvingState_TimedShelve = 11846,
    SystemOffNormalAlarmType_ShelvingState_TimedShelve_InputArguments = 11847,
    SystemOffNormalAlarmType_SuppressedOrShelved = 11848,
    SystemOffNormalAlarmType_MaxTimeShelved = 11849,
    SystemOffNormalAlarmType_NormalState = 11850,
    AuditConditionCommentEventType_Comment = 11851,
    AuditConditionRespondEventType_SelectedResponse = 11852,
    AuditConditionAcknowledgeEventType_Comment = 11853,
    AuditConditionConfirmEventType_Comment = 11854,
    AuditConditionShelvingEventType_ShelvingTime = 11855,
    AuditProgramTransitionEventType = 11856,
    AuditProgramTransitionEventType_EventId = 11857,
    AuditProgramTransitionEventType_EventType = 11858,
    AuditProgramTransitionEventType_SourceNode = 11859,
    AuditProgramTransitionEventType_SourceName = 11860,
    AuditProgramTransitionEventType_Time = 11861,
    AuditProgramTransitionEventType_ReceiveTime = 11862,
    AuditProgramTransitionEventType_LocalTime = 11863,
    AuditProgramTransitionEventType_Message = 11864,
    AuditProgramTransitionEventType_Severity = 11865,
    AuditProgramTransitionEventType_ActionTimeStamp = 11866,
    AuditProgramTransitionEventType_Status = 11867,
    AuditProgramTransitionEventType_ServerId = 11868,
    AuditProgramTransitionEventType_ClientAuditEntryId = 11869,
    AuditProgramTransitionEventType_ClientUserId = 11870,
    AuditProgramTransitionEventType_MethodId = 11871,
    AuditProgramTransitionEventType_InputArguments = 11872,
    AuditProgramTransitionEventType_OldStateId = 11873,
    AuditProgramTransitionEventType_NewStateId = 11874,
    AuditProgramTransitionEventType_TransitionNumber = 11875,
    HistoricalDataConfigurationType_AggregateFunctions = 11876,
    HAConfiguration_AggregateFunctions = 11877,
    NodeClass_EnumValues = 11878,
    InstanceNode = 11879,
    TypeNode = 11880,
    NodeAttributesMask_EnumValues = 11881,
    BrowseResultMask_EnumValues = 11883,
    HistoryUpdateType_EnumValues = 11884,
    PerformUpdateType_EnumValues = 11885,
    InstanceNode_Encoding_DefaultXml = 11887,
    TypeNode_Encoding_DefaultXml = 11888,
    InstanceNode_Encoding_DefaultBinary = 11889,
    TypeNode_Encoding_DefaultBinary = 11890,
    SessionDiagnosticsObjectType_SessionDiagnostics_UnauthorizedRequestCount = 11891,
    SessionDiagnosticsVariableType_UnauthorizedRequestCount = 11892,
    OpenFileMode = 11939,
    OpenFileMode_EnumValues = 11940,
    ModelChangeStructureVerbMask = 11941,
    ModelChangeStructureVerbMask_EnumValues = 11942,
    EndpointUrlListDataType = 11943,
    NetworkGroupDataType = 11944,
    NonTransparentNetworkRedundancyType = 11945,
    NonTransparentNetworkRedundancyType_RedundancySupport = 11946,
    NonTransparentNetworkRedundancyType_ServerUriArray = 11947,
    NonTransparentNetworkRedundancyType_ServerNetworkGroups = 11948,
    EndpointUrlListDataType_Encoding_DefaultXml = 11949,
    NetworkGroupDataType_Encoding_DefaultXml = 11950,
    OpcUa_XmlSchema_EndpointUrlListDataType = 11951,
    OpcUa_XmlSchema_EndpointUrlListDataType_DataTypeVersion = 11952,
    OpcUa_XmlSchema_EndpointUrlListDataType_DictionaryFragment = 11953,
    OpcUa_XmlSchema_NetworkGroupDataType = 11954,
    OpcUa_XmlSchema_NetworkGroupDataType_DataTypeVersion = 11955,
    OpcUa_XmlSchema_NetworkGroupDataType_DictionaryFragment = 11956,
    EndpointUrlListDataType_Encoding_DefaultBinary = 11957,
    NetworkGroupDataType_Encoding_DefaultBinary = 11958,
    OpcUa_BinarySchema_EndpointUrlListDataType = 11959,
    OpcUa_BinarySchema_EndpointUrlListDataType_DataTypeVersion = 11960,
    OpcUa_BinarySchema_EndpointUrlListDataType_DictionaryFragment = 11961,
    OpcUa_BinarySchema_NetworkGroupDataType = 11962,
    OpcUa_BinarySchema_NetworkGroupDataType_DataTypeVersion = 11963,
    OpcUa_BinarySchema_NetworkGroupDataType_DictionaryFragment = 11964,
    ArrayItemType = 12021,
    ArrayItemType_Definition = 12022,
    ArrayItemType_ValuePrecision = 12023,
    ArrayItemType_InstrumentRange = 12024,
    ArrayItemType_EURange = 12025,
    ArrayItemType_EngineeringUnits = 12026,
    ArrayItemType_Title = 12027,
    ArrayItemType_AxisScaleType = 12028,
    YArrayItemType = 12029,
    YArrayItemType_Definition = 12030,
    YArrayItemType_ValuePrecision = 12031,
    YArrayItemType_InstrumentRange = 12032,
    YArrayItemType_EURange = 12033,
    YArrayItemType_EngineeringUnits = 12034,
    YArrayItemType_Title = 12035,
    YArrayItemType_AxisScaleType = 12036,
    YArrayItemType_XAxisDefinition = 12037,
    XYArrayItemType = 12038,
    XYArrayItemType_Definition = 12039,
    XYArrayItemType_ValuePrecision = 12040,
    XYArrayItemType_InstrumentRange = 12041,
    XYArrayItemType_EURange = 12042,
    XYArrayItemType_EngineeringUnits = 12043,
    XYArrayItemType_Title = 12044,
    XYArrayItemType_AxisScaleType = 12045,
    XYArrayItemType_XAxisDefinition = 12046,
    ImageItemType = 12047,
    ImageItemType_Definition = 12048,
    ImageItemType_ValuePrecision = 12049,
    ImageItemType_InstrumentRange = 12050,
    ImageItemType_EURange = 12051,
    ImageItemType_EngineeringUnits = 12052,
    ImageItemType_Title = 12053,
    ImageItemType_AxisScaleType = 12054,
    ImageItemType_XAxisDefinition = 12055,
    ImageItemType_YAxisDefinition = 12056,
    CubeItemType = 12057,
    CubeItemType_Definition = 12058,
    CubeItemType_ValuePrecision = 12059,
    CubeItemType_InstrumentRange = 12060,
    CubeItemType_EURange = 12061,
    CubeItemType_EngineeringUnits = 12062,
    CubeItemType_Title = 12063,
    CubeItemType_AxisScaleType = 12064,
    CubeItemType_XAxisDefinition = 12065,
    CubeItemType_YAxisDefinition = 12066,
    CubeItemType_ZAxisDefinition = 12067,
    NDimensionArrayItemType = 12068,
    NDimensionArrayItemType_Definition = 12069,
    NDimensionArrayItemType_ValuePrecision = 12070,
    NDimensionArrayItemType_InstrumentRange = 12071,
    NDimensionArrayItemType_EURange = 12072,
    NDimensionArrayItemType_EngineeringUnits = 12073,
    NDimensionArrayItemType_Title = 12074,
    NDimensionArrayItemType_AxisScaleType = 12075,
    NDimensionArrayItemType_AxisDefinition = 12076,
    AxisScaleEnumeration = 12077,
    AxisScaleEnumeration_EnumStrings = 12078,
    AxisInformation = 12079,
    XVType = 12080,
    AxisInformation_Encoding_DefaultXml = 12081,
    XVType_Encoding_DefaultXml = 12082,
    OpcUa_XmlSchema_AxisInformation = 12083,
    OpcUa_XmlSchema_AxisInformation_DataTypeVersion = 12084,
    OpcUa_XmlSchema_AxisInformation_DictionaryFragment = 12085,
    OpcUa_XmlSchema_XVType = 12086,
    OpcUa_XmlSchema_XVType_DataTypeVersion = 12087,
    OpcUa_XmlSchema_XVType_DictionaryFragment = 12088,
    AxisInformation_Encoding_DefaultBinary = 12089,
    XVType_Encoding_DefaultBinary = 12090,
    OpcUa_BinarySchema_AxisInformation = 12091,
    OpcUa_BinarySchema_AxisInformation_DataTypeVersion = 12092,
    OpcUa_BinarySchema_AxisInformation_DictionaryFragment = 12093,
    OpcUa_BinarySchema_XVType = 12094,
    OpcUa_BinarySchema_XVType_DataTypeVersion = 12095,
    OpcUa_BinarySchema_XVType_DictionaryFragment = 12096,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder = 12097,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics = 12098,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_SessionId = 12099,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_SessionName = 12100,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_ClientDescription = 12101,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_ServerUri = 12102,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_EndpointUrl = 12103,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_LocaleIds = 12104,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_ActualSessionTimeout = 12105,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_MaxResponseMessageSize = 12106,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_ClientConnectionTime = 12107,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_ClientLastContactTime = 12108,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_CurrentSubscriptionsCount = 12109,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_CurrentMonitoredItemsCount = 12110,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_CurrentPublishRequestsInQueue = 12111,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_TotalRequestCount = 12112,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_UnauthorizedRequestCount = 12113,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_ReadCount = 12114,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_HistoryReadCount = 12115,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_WriteCount = 12116,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_HistoryUpdateCount = 12117,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_CallCount = 12118,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_CreateMonitoredItemsCount = 12119,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_ModifyMonitoredItemsCount = 12120,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_SetMonitoringModeCount = 12121,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_SetTriggeringCount = 12122,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_DeleteMonitoredItemsCount = 12123,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_CreateSubscriptionCount = 12124,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_ModifySubscriptionCount = 12125,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_SetPublishingModeCount = 12126,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_PublishCount = 12127,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_RepublishCount = 12128,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_TransferSubscriptionsCount = 12129,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_DeleteSubscriptionsCount = 12130,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_AddNodesCount = 12131,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_AddReferencesCount = 12132,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_DeleteNodesCount = 12133,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_DeleteReferencesCount = 12134,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_BrowseCount = 12135,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_BrowseNextCount = 12136,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_TranslateBrowsePathsToNodeIdsCount = 12137,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_QueryFirstCount = 12138,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_QueryNextCount = 12139,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_RegisterNodesCount = 12140,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionDiagnostics_UnregisterNodesCount = 12141,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics = 12142,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_SessionId = 12143,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_ClientUserIdOfSession = 12144,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_ClientUserIdHistory = 12145,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_AuthenticationMechanism = 12146,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_Encoding = 12147,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_TransportProtocol = 12148,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_SecurityMode = 12149,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_SecurityPolicyUri = 12150,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SessionSecurityDiagnostics_ClientCertificate = 12151,
    SessionsDiagnosticsSummaryType_ClientName_Placeholder_SubscriptionDiagnosticsArray = 12152,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerHistoryReadData = 12153,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerHistoryReadEvents = 12154,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerHistoryUpdateData = 12155,
    ServerType_ServerCapabilities_OperationLimits_MaxNodesPerHistoryUpdateEvents = 12156,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerHistoryReadData = 12157,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerHistoryReadEvents = 12158,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerHistoryUpdateData = 12159,
    ServerCapabilitiesType_OperationLimits_MaxNodesPerHistoryUpdateEvents = 12160,
    OperationLimitsType_MaxNodesPerHistoryReadData = 12161,
    OperationLimitsType_MaxNodesPerHistoryReadEvents = 12162,
    OperationLimitsType_MaxNodesPerHistoryUpdateData = 12163,
    OperationLimitsType_MaxNodesPerHistoryUpdateEvents = 12164,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerHistoryReadData = 12165,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerHistoryReadEvents = 12166,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerHistoryUpdateData = 12167,
    Server_ServerCapabilities_OperationLimits_MaxNodesPerHistoryUpdateEvents = 12168,
    NamingRuleType_EnumValues = 12169,
    ViewVersion = 12170,
    ComplexNumberType = 12171,
    DoubleComplexNumberType = 12172,
    ComplexNumberType_Encoding_DefaultXml = 12173,
    DoubleComplexNumberType_Encoding_DefaultXml = 12174,
    OpcUa_XmlSchema_ComplexNumberType = 12175,
    OpcUa_XmlSchema_ComplexNumberType_DataTypeVersion = 12176,
    OpcUa_XmlSchema_ComplexNumberType_DictionaryFragment = 12177,
    OpcUa_XmlSchema_DoubleComplexNumberType = 12178,
    OpcUa_XmlSchema_DoubleComplexNumberType_DataTypeVersion = 12179,
    OpcUa_XmlSchema_DoubleComplexNumberType_DictionaryFragment = 12180,
    ComplexNumberType_Encoding_DefaultBinary = 12181,
    DoubleComplexNumberType_Encoding_DefaultBinary = 12182,
    OpcUa_BinarySchema_ComplexNumberType = 12183,
    OpcUa_BinarySchema_ComplexNumberType_DataTypeVersion = 12184,
    OpcUa_BinarySchema_ComplexNumberType_DictionaryFragment = 12185,
    OpcUa_BinarySchema_DoubleComplexNumberType = 12186,
    OpcUa_BinarySchema_DoubleComplexNumberType_DataTypeVersion = 12187,
    OpcUa_BinarySchema_DoubleComplexNumberType_DictionaryFragment = 12188,
    ServerOnNetwork = 12189,
    FindServersOnNetworkRequest = 12190,
    FindServersOnNetworkResponse = 12191,
    RegisterServer2Request = 12193,
    RegisterServer2Response = 12194,
    ServerOnNetwork_Encoding_DefaultXml = 12195,
    FindServersOnNetworkRequest_Encoding_DefaultXml = 12196,
    FindServersOnNetworkResponse_Encoding_DefaultXml = 12197,
    RegisterServer2Request_Encoding_DefaultXml = 12199,
    RegisterServer2Response_Encoding_DefaultXml = 12200,
    OpcUa_XmlSchema_ServerOnNetwork = 12201,
    OpcUa_XmlSchema_ServerOnNetwork_DataTypeVersion = 12202,
    OpcUa_XmlSchema_ServerOnNetwork_DictionaryFragment = 12203,
    ServerOnNetwork_Encoding_DefaultBinary = 12207,
    FindServersOnNetworkRequest_Encoding_DefaultBinary = 12208,
    FindServersOnNetworkResponse_Encoding_DefaultBinary = 12209,
    RegisterServer2Request_Encoding_DefaultBinary = 12211,
    RegisterServer2Response_Encoding_DefaultBinary = 12212,
    OpcUa_BinarySchema_ServerOnNetwork = 12213,
    OpcUa_BinarySchema_ServerOnNetwork_DataTypeVersion = 12214,
    OpcUa_BinarySchema_ServerOnNetwork_DictionaryFragment = 12215,
    ProgressEventType_Context = 12502,
    ProgressEventType_Progress = 12503,
    OpenWithMasksMethodType = 12513,
    OpenWithMasksMethodType_InputArguments = 12514,
    OpenWithMasksMethodType_OutputArguments = 12515,
    CloseAndUpdateMethodType = 12516,
    CloseAndUpdateMethodType_OutputArguments = 12517,
    AddCertificateMethodType = 12518,
    AddCertificateMethodType_InputArguments = 12519,
    RemoveCertificateMethodType = 12520,
    RemoveCertificateMethodType_InputArguments = 12521,
    TrustListType = 12522,
    TrustListType_Size = 12523,
    TrustListType_OpenCount = 12526,
    TrustListType_Open = 12527,
    TrustListType_Open_InputArguments = 12528,
    TrustListType_Open_OutputArguments = 12529,
    TrustListType_Close = 12530,
    TrustListType_Close_InputArguments = 12531,
    TrustListType_Read = 12532,
    TrustListType_Read_InputArguments = 12533,
    TrustListType_Read_OutputArguments = 12534,
    TrustListType_Write = 12535,
    TrustListType_Write_InputArguments = 12536,
    TrustListType_GetPosition = 12537,
    TrustListType_GetPosition_InputArguments = 12538,
    TrustListType_GetPosition_OutputArguments = 12539,
    TrustListType_SetPosition = 12540,
    TrustListType_SetPosition_InputArguments = 12541,
    TrustListType_LastUpdateTime = 12542,
    TrustListType_OpenWithMasks = 12543,
    TrustListType_OpenWithMasks_InputArguments = 12544,
    TrustListType_OpenWithMasks_OutputArguments = 12545,
    TrustListType_CloseAndUpdate = 12546,
    TrustListType_CloseAndUpdate_OutputArguments = 12547,
    TrustListType_AddCertificate = 12548,
    TrustListType_AddCertificate_InputArguments = 12549,
    TrustListType_RemoveCertificate = 12550,
    TrustListType_RemoveCertificate_InputArguments = 12551,
    TrustListMasks = 12552,
    TrustListMasks_EnumValues = 12553,
    TrustListDataType = 12554,
    CertificateGroupType = 12555,
    CertificateType = 12556,
    ApplicationCertificateType = 12557,
    HttpsCertificateType = 12558,
    RsaMinApplicationCertificateType = 12559,
    RsaSha256ApplicationCertificateType = 12560,
    TrustListUpdatedAuditEventType = 12561,
    TrustListUpdatedAuditEventType_EventId = 12562,
    TrustListUpdatedAuditEventType_EventType = 12563,
    TrustListUpdatedAuditEventType_SourceNode = 12564,
    TrustListUpdatedAuditEventType_SourceName = 12565,
    TrustListUpdatedAuditEventType_Time = 12566,
    TrustListUpdatedAuditEventType_ReceiveTime = 12567,
    TrustListUpdatedAuditEventType_LocalTime = 12568,
    TrustListUpdatedAuditEventType_Message = 12569,
    TrustListUpdatedAuditEventType_Severity = 12570,
    TrustListUpdatedAuditEventType_ActionTimeStamp = 12571,
    TrustListUpdatedAuditEventType_Status = 12572,
    TrustListUpdatedAuditEventType_ServerId = 12573,
    TrustListUpdatedAuditEventType_ClientAuditEntryId = 12574,
    TrustListUpdatedAuditEventType_ClientUserId = 12575,
    TrustListUpdatedAuditEventType_MethodId = 12576,
    TrustListUpdatedAuditEventType_InputArguments = 12577,
    UpdateCertificateMethodType = 12578,
    UpdateCertificateMethodType_InputArguments = 12579,
    UpdateCertificateMethodType_OutputArguments = 12580,
    ServerConfigurationType = 12581,
    ServerConfigurationType_SupportedPrivateKeyFormats = 12583,
    ServerConfigurationType_MaxTrustListSize = 12584,
    ServerConfigurationType_MulticastDnsEnabled = 12585,
    ServerConfigurationType_UpdateCertificate = 12616,
    ServerConfigurationType_UpdateCertificate_InputArguments = 12617,
    ServerConfigurationType_UpdateCertificate_OutputArguments = 12618,
    CertificateUpdatedAuditEventType = 12620,
    CertificateUpdatedAuditEventType_EventId = 12621,
    CertificateUpdatedAuditEventType_EventType = 12622,
    CertificateUpdatedAuditEventType_SourceNode = 12623,
    CertificateUpdatedAuditEventType_SourceName = 12624,
    CertificateUpdatedAuditEventType_Time = 12625,
    CertificateUpdatedAuditEventType_ReceiveTime = 12626,
    CertificateUpdatedAuditEventType_LocalTime = 12627,
    CertificateUpdatedAuditEventType_Message = 12628,
    CertificateUpdatedAuditEventType_Severity = 12629,
    CertificateUpdatedAuditEventType_ActionTimeStamp = 12630,
    CertificateUpdatedAuditEventType_Status = 12631,
    CertificateUpdatedAuditEventType_ServerId = 12632,
    CertificateUpdatedAuditEventType_ClientAuditEntryId = 12633,
    CertificateUpdatedAuditEventType_ClientUserId = 12634,
    CertificateUpdatedAuditEventType_MethodId = 12635,
    CertificateUpdatedAuditEventType_InputArguments = 12636,
    ServerConfiguration = 12637,
    ServerConfiguration_SupportedPrivateKeyFormats = 12639,
    ServerConfiguration_MaxTrustListSize = 12640,
    ServerConfiguration_MulticastDnsEnabled = 12641,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList = 12642,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Size = 12643,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_OpenCount = 12646,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Open = 12647,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Open_InputArguments = 12648,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Open_OutputArguments = 12649,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Close = 12650,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Close_InputArguments = 12651,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Read = 12652,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Read_InputArguments = 12653,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Read_OutputArguments = 12654,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Write = 12655,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Write_InputArguments = 12656,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_GetPosition = 12657,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_GetPosition_InputArguments = 12658,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_GetPosition_OutputArguments = 12659,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_SetPosition = 12660,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_SetPosition_InputArguments = 12661,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_LastUpdateTime = 12662,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_OpenWithMasks = 12663,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_OpenWithMasks_InputArguments = 12664,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_OpenWithMasks_OutputArguments = 12665,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_CloseAndUpdate = 12666,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_CloseAndUpdate_OutputArguments = 12667,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_AddCertificate = 12668,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_AddCertificate_InputArguments = 12669,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_RemoveCertificate = 12670,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_RemoveCertificate_InputArguments = 12671,
    TrustListDataType_Encoding_DefaultXml = 12676,
    OpcUa_XmlSchema_TrustListDataType = 12677,
    OpcUa_XmlSchema_TrustListDataType_DataTypeVersion = 12678,
    OpcUa_XmlSchema_TrustListDataType_DictionaryFragment = 12679,
    TrustListDataType_Encoding_DefaultBinary = 12680,
    OpcUa_BinarySchema_TrustListDataType = 12681,
    OpcUa_BinarySchema_TrustListDataType_DataTypeVersion = 12682,
    OpcUa_BinarySchema_TrustListDataType_DictionaryFragment = 12683,
    FileType_Writable = 12686,
    FileType_UserWritable = 12687,
    AddressSpaceFileType_Writable = 12688,
    AddressSpaceFileType_UserWritable = 12689,
    NamespaceMetadataType_NamespaceFile_Writable = 12690,
    NamespaceMetadataType_NamespaceFile_UserWritable = 12691,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_Writable = 12692,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_UserWritable = 12693,
    TrustListType_Writable = 12698,
    TrustListType_UserWritable = 12699,
    CloseAndUpdateMethodType_InputArguments = 12704,
    TrustListType_CloseAndUpdate_InputArguments = 12705,
    ServerConfigurationType_ServerCapabilities = 12708,
    ServerConfiguration_ServerCapabilities = 12710,
    OpcUa_XmlSchema_RelativePathElement = 12712,
    OpcUa_XmlSchema_RelativePathElement_DataTypeVersion = 12713,
    OpcUa_XmlSchema_RelativePathElement_DictionaryFragment = 12714,
    OpcUa_XmlSchema_RelativePath = 12715,
    OpcUa_XmlSchema_RelativePath_DataTypeVersion = 12716,
    OpcUa_XmlSchema_RelativePath_DictionaryFragment = 12717,
    OpcUa_BinarySchema_RelativePathElement = 12718,
    OpcUa_BinarySchema_RelativePathElement_DataTypeVersion = 12719,
    OpcUa_BinarySchema_RelativePathElement_DictionaryFragment = 12720,
    OpcUa_BinarySchema_RelativePath = 12721,
    OpcUa_BinarySchema_RelativePath_DataTypeVersion = 12722,
    OpcUa_BinarySchema_RelativePath_DictionaryFragment = 12723,
    ServerConfigurationType_CreateSigningRequest = 12731,
    ServerConfigurationType_CreateSigningRequest_InputArguments = 12732,
    ServerConfigurationType_CreateSigningRequest_OutputArguments = 12733,
    ServerConfigurationType_ApplyChanges = 12734,
    ServerConfiguration_CreateSigningRequest = 12737,
    ServerConfiguration_CreateSigningRequest_InputArguments = 12738,
    ServerConfiguration_CreateSigningRequest_OutputArguments = 12739,
    ServerConfiguration_ApplyChanges = 12740,
    CreateSigningRequestMethodType = 12741,
    CreateSigningRequestMethodType_InputArguments = 12742,
    CreateSigningRequestMethodType_OutputArguments = 12743,
    OptionSetValues = 12745,
    ServerType_SetSubscriptionDurable = 12746,
    ServerType_SetSubscriptionDurable_InputArguments = 12747,
    ServerType_SetSubscriptionDurable_OutputArguments = 12748,
    Server_SetSubscriptionDurable = 12749,
    Server_SetSubscriptionDurable_InputArguments = 12750,
    Server_SetSubscriptionDurable_OutputArguments = 12751,
    SetSubscriptionDurableMethodType = 12752,
    SetSubscriptionDurableMethodType_InputArguments = 12753,
    SetSubscriptionDurableMethodType_OutputArguments = 12754,
    OptionSet = 12755,
    Union = 12756,
    OptionSet_Encoding_DefaultXml = 12757,
    Union_Encoding_DefaultXml = 12758,
    OpcUa_XmlSchema_OptionSet = 12759,
    OpcUa_XmlSchema_OptionSet_DataTypeVersion = 12760,
    OpcUa_XmlSchema_OptionSet_DictionaryFragment = 12761,
    OpcUa_XmlSchema_Union = 12762,
    OpcUa_XmlSchema_Union_DataTypeVersion = 12763,
    OpcUa_XmlSchema_Union_DictionaryFragment = 12764,
    OptionSet_Encoding_DefaultBinary = 12765,
    Union_Encoding_DefaultBinary = 12766,
    OpcUa_BinarySchema_OptionSet = 12767,
    OpcUa_BinarySchema_OptionSet_DataTypeVersion = 12768,
    OpcUa_BinarySchema_OptionSet_DictionaryFragment = 12769,
    OpcUa_BinarySchema_Union = 12770,
    OpcUa_BinarySchema_Union_DataTypeVersion = 12771,
    OpcUa_BinarySchema_Union_DictionaryFragment = 12772,
    GetRejectedListMethodType = 12773,
    GetRejectedListMethodType_OutputArguments = 12774,
    ServerConfigurationType_GetRejectedList = 12775,
    ServerConfigurationType_GetRejectedList_OutputArguments = 12776,
    ServerConfiguration_GetRejectedList = 12777,
    ServerConfiguration_GetRejectedList_OutputArguments = 12778,
    SamplingIntervalDiagnosticsArrayType_SamplingIntervalDiagnostics = 12779,
    SamplingIntervalDiagnosticsArrayType_SamplingIntervalDiagnostics_SamplingInterval = 12780,
    SamplingIntervalDiagnosticsArrayType_SamplingIntervalDiagnostics_SampledMonitoredItemsCount = 12781,
    SamplingIntervalDiagnosticsArrayType_SamplingIntervalDiagnostics_MaxSampledMonitoredItemsCount = 12782,
    SamplingIntervalDiagnosticsArrayType_SamplingIntervalDiagnostics_DisabledMonitoredItemsSamplingCount = 12783,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics = 12784,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_SessionId = 12785,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_SubscriptionId = 12786,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_Priority = 12787,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_PublishingInterval = 12788,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_MaxKeepAliveCount = 12789,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_MaxLifetimeCount = 12790,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_MaxNotificationsPerPublish = 12791,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_PublishingEnabled = 12792,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_ModifyCount = 12793,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_EnableCount = 12794,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_DisableCount = 12795,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_RepublishRequestCount = 12796,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_RepublishMessageRequestCount = 12797,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_RepublishMessageCount = 12798,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_TransferRequestCount = 12799,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_TransferredToAltClientCount = 12800,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_TransferredToSameClientCount = 12801,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_PublishRequestCount = 12802,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_DataChangeNotificationsCount = 12803,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_EventNotificationsCount = 12804,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_NotificationsCount = 12805,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_LatePublishRequestCount = 12806,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_CurrentKeepAliveCount = 12807,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_CurrentLifetimeCount = 12808,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_UnacknowledgedMessageCount = 12809,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_DiscardedMessageCount = 12810,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_MonitoredItemCount = 12811,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_DisabledMonitoredItemCount = 12812,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_MonitoringQueueOverflowCount = 12813,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_NextSequenceNumber = 12814,
    SubscriptionDiagnosticsArrayType_SubscriptionDiagnostics_EventQueueOverflowCount = 12815,
    SessionDiagnosticsArrayType_SessionDiagnostics = 12816,
    SessionDiagnosticsArrayType_SessionDiagnostics_SessionId = 12817,
    SessionDiagnosticsArrayType_SessionDiagnostics_SessionName = 12818,
    SessionDiagnosticsArrayType_SessionDiagnostics_ClientDescription = 12819,
    SessionDiagnosticsArrayType_SessionDiagnostics_ServerUri = 12820,
    SessionDiagnosticsArrayType_SessionDiagnostics_EndpointUrl = 12821,
    SessionDiagnosticsArrayType_SessionDiagnostics_LocaleIds = 12822,
    SessionDiagnosticsArrayType_SessionDiagnostics_ActualSessionTimeout = 12823,
    SessionDiagnosticsArrayType_SessionDiagnostics_MaxResponseMessageSize = 12824,
    SessionDiagnosticsArrayType_SessionDiagnostics_ClientConnectionTime = 12825,
    SessionDiagnosticsArrayType_SessionDiagnostics_ClientLastContactTime = 12826,
    SessionDiagnosticsArrayType_SessionDiagnostics_CurrentSubscriptionsCount = 12827,
    SessionDiagnosticsArrayType_SessionDiagnostics_CurrentMonitoredItemsCount = 12828,
    SessionDiagnosticsArrayType_SessionDiagnostics_CurrentPublishRequestsInQueue = 12829,
    SessionDiagnosticsArrayType_SessionDiagnostics_TotalRequestCount = 12830,
    SessionDiagnosticsArrayType_SessionDiagnostics_UnauthorizedRequestCount = 12831,
    SessionDiagnosticsArrayType_SessionDiagnostics_ReadCount = 12832,
    SessionDiagnosticsArrayType_SessionDiagnostics_HistoryReadCount = 12833,
    SessionDiagnosticsArrayType_SessionDiagnostics_WriteCount = 12834,
    SessionDiagnosticsArrayType_SessionDiagnostics_HistoryUpdateCount = 12835,
    SessionDiagnosticsArrayType_SessionDiagnostics_CallCount = 12836,
    SessionDiagnosticsArrayType_SessionDiagnostics_CreateMonitoredItemsCount = 12837,
    SessionDiagnosticsArrayType_SessionDiagnostics_ModifyMonitoredItemsCount = 12838,
    SessionDiagnosticsArrayType_SessionDiagnostics_SetMonitoringModeCount = 12839,
    SessionDiagnosticsArrayType_SessionDiagnostics_SetTriggeringCount = 12840,
    SessionDiagnosticsArrayType_SessionDiagnostics_DeleteMonitoredItemsCount = 12841,
    SessionDiagnosticsArrayType_SessionDiagnostics_CreateSubscriptionCount = 12842,
    SessionDiagnosticsArrayType_SessionDiagnostics_ModifySubscriptionCount = 12843,
    SessionDiagnosticsArrayType_SessionDiagnostics_SetPublishingModeCount = 12844,
    SessionDiagnosticsArrayType_SessionDiagnostics_PublishCount = 12845,
    SessionDiagnosticsArrayType_SessionDiagnostics_RepublishCount = 12846,
    SessionDiagnosticsArrayType_SessionDiagnostics_TransferSubscriptionsCount = 12847,
    SessionDiagnosticsArrayType_SessionDiagnostics_DeleteSubscriptionsCount = 12848,
    SessionDiagnosticsArrayType_SessionDiagnostics_AddNodesCount = 12849,
    SessionDiagnosticsArrayType_SessionDiagnostics_AddReferencesCount = 12850,
    SessionDiagnosticsArrayType_SessionDiagnostics_DeleteNodesCount = 12851,
    SessionDiagnosticsArrayType_SessionDiagnostics_DeleteReferencesCount = 12852,
    SessionDiagnosticsArrayType_SessionDiagnostics_BrowseCount = 12853,
    SessionDiagnosticsArrayType_SessionDiagnostics_BrowseNextCount = 12854,
    SessionDiagnosticsArrayType_SessionDiagnostics_TranslateBrowsePathsToNodeIdsCount = 12855,
    SessionDiagnosticsArrayType_SessionDiagnostics_QueryFirstCount = 12856,
    SessionDiagnosticsArrayType_SessionDiagnostics_QueryNextCount = 12857,
    SessionDiagnosticsArrayType_SessionDiagnostics_RegisterNodesCount = 12858,
    SessionDiagnosticsArrayType_SessionDiagnostics_UnregisterNodesCount = 12859,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics = 12860,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_SessionId = 12861,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_ClientUserIdOfSession = 12862,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_ClientUserIdHistory = 12863,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_AuthenticationMechanism = 12864,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_Encoding = 12865,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_TransportProtocol = 12866,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_SecurityMode = 12867,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_SecurityPolicyUri = 12868,
    SessionSecurityDiagnosticsArrayType_SessionSecurityDiagnostics_ClientCertificate = 12869,
    ServerType_ResendData = 12871,
    ServerType_ResendData_InputArguments = 12872,
    Server_ResendData = 12873,
    Server_ResendData_InputArguments = 12874,
    ResendDataMethodType = 12875,
    ResendDataMethodType_InputArguments = 12876,
    NormalizedString = 12877,
    DecimalString = 12878,
    DurationString = 12879,
    TimeString = 12880,
    DateString = 12881,
    ServerType_EstimatedReturnTime = 12882,
    ServerType_RequestServerStateChange = 12883,
    ServerType_RequestServerStateChange_InputArguments = 12884,
    Server_EstimatedReturnTime = 12885,
    Server_RequestServerStateChange = 12886,
    Server_RequestServerStateChange_InputArguments = 12887,
    RequestServerStateChangeMethodType = 12888,
    RequestServerStateChangeMethodType_InputArguments = 12889,
    DiscoveryConfiguration = 12890,
    MdnsDiscoveryConfiguration = 12891,
    DiscoveryConfiguration_Encoding_DefaultBinary = 12900,
    MdnsDiscoveryConfiguration_Encoding_DefaultBinary = 12901,
    OpcUa_BinarySchema_DiscoveryConfiguration = 12902,
    OpcUa_BinarySchema_DiscoveryConfiguration_DataTypeVersion = 12903,
    OpcUa_BinarySchema_DiscoveryConfiguration_DictionaryFragment = 12904,
    OpcUa_BinarySchema_MdnsDiscoveryConfiguration = 12905,
    OpcUa_BinarySchema_MdnsDiscoveryConfiguration_DataTypeVersion = 12906,
    OpcUa_BinarySchema_MdnsDiscoveryConfiguration_DictionaryFragment = 12907,
    MaxByteStringLength = 12908,
    ServerType_ServerCapabilities_MaxByteStringLength = 12909,
    ServerCapabilitiesType_MaxByteStringLength = 12910,
    Server_ServerCapabilities_MaxByteStringLength = 12911,
    ConditionType_ConditionRefresh2 = 12912,
    ConditionType_ConditionRefresh2_InputArguments = 12913,
    ConditionRefresh2MethodType = 12914,
    ConditionRefresh2MethodType_InputArguments = 12915,
    DialogConditionType_ConditionRefresh2 = 12916,
    DialogConditionType_ConditionRefresh2_InputArguments = 12917,
    AcknowledgeableConditionType_ConditionRefresh2 = 12918,
    AcknowledgeableConditionType_ConditionRefresh2_InputArguments = 12919,
    AlarmConditionType_ConditionRefresh2 = 12984,
    AlarmConditionType_ConditionRefresh2_InputArguments = 12985,
    LimitAlarmType_ConditionRefresh2 = 12986,
    LimitAlarmType_ConditionRefresh2_InputArguments = 12987,
    ExclusiveLimitAlarmType_ConditionRefresh2 = 12988,
    ExclusiveLimitAlarmType_ConditionRefresh2_InputArguments = 12989,
    NonExclusiveLimitAlarmType_ConditionRefresh2 = 12990,
    NonExclusiveLimitAlarmType_ConditionRefresh2_InputArguments = 12991,
    NonExclusiveLevelAlarmType_ConditionRefresh2 = 12992,
    NonExclusiveLevelAlarmType_ConditionRefresh2_InputArguments = 12993,
    ExclusiveLevelAlarmType_ConditionRefresh2 = 12994,
    ExclusiveLevelAlarmType_ConditionRefresh2_InputArguments = 12995,
    NonExclusiveDeviationAlarmType_ConditionRefresh2 = 12996,
    NonExclusiveDeviationAlarmType_ConditionRefresh2_InputArguments = 12997,
    ExclusiveDeviationAlarmType_ConditionRefresh2 = 12998,
    ExclusiveDeviationAlarmType_ConditionRefresh2_InputArguments = 12999,
    NonExclusiveRateOfChangeAlarmType_ConditionRefresh2 = 13000,
    NonExclusiveRateOfChangeAlarmType_ConditionRefresh2_InputArguments = 13001,
    ExclusiveRateOfChangeAlarmType_ConditionRefresh2 = 13002,
    ExclusiveRateOfChangeAlarmType_ConditionRefresh2_InputArguments = 13003,
    DiscreteAlarmType_ConditionRefresh2 = 13004,
    DiscreteAlarmType_ConditionRefresh2_InputArguments = 13005,
    OffNormalAlarmType_ConditionRefresh2 = 13006,
    OffNormalAlarmType_ConditionRefresh2_InputArguments = 13007,
    SystemOffNormalAlarmType_ConditionRefresh2 = 13008,
    SystemOffNormalAlarmType_ConditionRefresh2_InputArguments = 13009,
    TripAlarmType_ConditionRefresh2 = 13010,
    TripAlarmType_ConditionRefresh2_InputArguments = 13011,
    CertificateExpirationAlarmType = 13225,
    CertificateExpirationAlarmType_EventId = 13226,
    CertificateExpirationAlarmType_EventType = 13227,
    CertificateExpirationAlarmType_SourceNode = 13228,
    CertificateExpirationAlarmType_SourceName = 13229,
    CertificateExpirationAlarmType_Time = 13230,
    CertificateExpirationAlarmType_ReceiveTime = 13231,
    CertificateExpirationAlarmType_LocalTime = 13232,
    CertificateExpirationAlarmType_Message = 13233,
    CertificateExpirationAlarmType_Severity = 13234,
    CertificateExpirationAlarmType_ConditionClassId = 13235,
    CertificateExpirationAlarmType_ConditionClassName = 13236,
    CertificateExpirationAlarmType_ConditionName = 13237,
    CertificateExpirationAlarmType_BranchId = 13238,
    CertificateExpirationAlarmType_Retain = 13239,
    CertificateExpirationAlarmType_EnabledState = 13240,
    CertificateExpirationAlarmType_EnabledState_Id = 13241,
    CertificateExpirationAlarmType_EnabledState_Name = 13242,
    CertificateExpirationAlarmType_EnabledState_Number = 13243,
    CertificateExpirationAlarmType_EnabledState_EffectiveDisplayName = 13244,
    CertificateExpirationAlarmType_EnabledState_TransitionTime = 13245,
    CertificateExpirationAlarmType_EnabledState_EffectiveTransitionTime = 13246,
    CertificateExpirationAlarmType_EnabledState_TrueState = 13247,
    CertificateExpirationAlarmType_EnabledState_FalseState = 13248,
    CertificateExpirationAlarmType_Quality = 13249,
    CertificateExpirationAlarmType_Quality_SourceTimestamp = 13250,
    CertificateExpirationAlarmType_LastSeverity = 13251,
    CertificateExpirationAlarmType_LastSeverity_SourceTimestamp = 13252,
    CertificateExpirationAlarmType_Comment = 13253,
    CertificateExpirationAlarmType_Comment_SourceTimestamp = 13254,
    CertificateExpirationAlarmType_ClientUserId = 13255,
    CertificateExpirationAlarmType_Disable = 13256,
    CertificateExpirationAlarmType_Enable = 13257,
    CertificateExpirationAlarmType_AddComment = 13258,
    CertificateExpirationAlarmType_AddComment_InputArguments = 13259,
    CertificateExpirationAlarmType_ConditionRefresh = 13260,
    CertificateExpirationAlarmType_ConditionRefresh_InputArguments = 13261,
    CertificateExpirationAlarmType_ConditionRefresh2 = 13262,
    CertificateExpirationAlarmType_ConditionRefresh2_InputArguments = 13263,
    CertificateExpirationAlarmType_AckedState = 13264,
    CertificateExpirationAlarmType_AckedState_Id = 13265,
    CertificateExpirationAlarmType_AckedState_Name = 13266,
    CertificateExpirationAlarmType_AckedState_Number = 13267,
    CertificateExpirationAlarmType_AckedState_EffectiveDisplayName = 13268,
    CertificateExpirationAlarmType_AckedState_TransitionTime = 13269,
    CertificateExpirationAlarmType_AckedState_EffectiveTransitionTime = 13270,
    CertificateExpirationAlarmType_AckedState_TrueState = 13271,
    CertificateExpirationAlarmType_AckedState_FalseState = 13272,
    CertificateExpirationAlarmType_ConfirmedState = 13273,
    CertificateExpirationAlarmType_ConfirmedState_Id = 13274,
    CertificateExpirationAlarmType_ConfirmedState_Name = 13275,
    CertificateExpirationAlarmType_ConfirmedState_Number = 13276,
    CertificateExpirationAlarmType_ConfirmedState_EffectiveDisplayName = 13277,
    CertificateExpirationAlarmType_ConfirmedState_TransitionTime = 13278,
    CertificateExpirationAlarmType_ConfirmedState_EffectiveTransitionTime = 13279,
    CertificateExpirationAlarmType_ConfirmedState_TrueState = 13280,
    CertificateExpirationAlarmType_ConfirmedState_FalseState = 13281,
    CertificateExpirationAlarmType_Acknowledge = 13282,
    CertificateExpirationAlarmType_Acknowledge_InputArguments = 13283,
    CertificateExpirationAlarmType_Confirm = 13284,
    CertificateExpirationAlarmType_Confirm_InputArguments = 13285,
    CertificateExpirationAlarmType_ActiveState = 13286,
    CertificateExpirationAlarmType_ActiveState_Id = 13287,
    CertificateExpirationAlarmType_ActiveState_Name = 13288,
    CertificateExpirationAlarmType_ActiveState_Number = 13289,
    CertificateExpirationAlarmType_ActiveState_EffectiveDisplayName = 13290,
    CertificateExpirationAlarmType_ActiveState_TransitionTime = 13291,
    CertificateExpirationAlarmType_ActiveState_EffectiveTransitionTime = 13292,
    CertificateExpirationAlarmType_ActiveState_TrueState = 13293,
    CertificateExpirationAlarmType_ActiveState_FalseState = 13294,
    CertificateExpirationAlarmType_InputNode = 13295,
    CertificateExpirationAlarmType_SuppressedState = 13296,
    CertificateExpirationAlarmType_SuppressedState_Id = 13297,
    CertificateExpirationAlarmType_SuppressedState_Name = 13298,
    CertificateExpirationAlarmType_SuppressedState_Number = 13299,
    CertificateExpirationAlarmType_SuppressedState_EffectiveDisplayName = 13300,
    CertificateExpirationAlarmType_SuppressedState_TransitionTime = 13301,
    CertificateExpirationAlarmType_SuppressedState_EffectiveTransitionTime = 13302,
    CertificateExpirationAlarmType_SuppressedState_TrueState = 13303,
    CertificateExpirationAlarmType_SuppressedState_FalseState = 13304,
    CertificateExpirationAlarmType_ShelvingState = 13305,
    CertificateExpirationAlarmType_ShelvingState_CurrentState = 13306,
    CertificateExpirationAlarmType_ShelvingState_CurrentState_Id = 13307,
    CertificateExpirationAlarmType_ShelvingState_CurrentState_Name = 13308,
    CertificateExpirationAlarmType_ShelvingState_CurrentState_Number = 13309,
    CertificateExpirationAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 13310,
    CertificateExpirationAlarmType_ShelvingState_LastTransition = 13311,
    CertificateExpirationAlarmType_ShelvingState_LastTransition_Id = 13312,
    CertificateExpirationAlarmType_ShelvingState_LastTransition_Name = 13313,
    CertificateExpirationAlarmType_ShelvingState_LastTransition_Number = 13314,
    CertificateExpirationAlarmType_ShelvingState_LastTransition_TransitionTime = 13315,
    CertificateExpirationAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 13316,
    CertificateExpirationAlarmType_ShelvingState_UnshelveTime = 13317,
    CertificateExpirationAlarmType_ShelvingState_Unshelve = 13318,
    CertificateExpirationAlarmType_ShelvingState_OneShotShelve = 13319,
    CertificateExpirationAlarmType_ShelvingState_TimedShelve = 13320,
    CertificateExpirationAlarmType_ShelvingState_TimedShelve_InputArguments = 13321,
    CertificateExpirationAlarmType_SuppressedOrShelved = 13322,
    CertificateExpirationAlarmType_MaxTimeShelved = 13323,
    CertificateExpirationAlarmType_NormalState = 13324,
    CertificateExpirationAlarmType_ExpirationDate = 13325,
    CertificateExpirationAlarmType_CertificateType = 13326,
    CertificateExpirationAlarmType_Certificate = 13327,
    FileType_MimeType = 13341,
    CreateDirectoryMethodType = 13342,
    CreateDirectoryMethodType_InputArguments = 13343,
    CreateDirectoryMethodType_OutputArguments = 13344,
    CreateFileMethodType = 13345,
    CreateFileMethodType_InputArguments = 13346,
    CreateFileMethodType_OutputArguments = 13347,
    DeleteFileMethodType = 13348,
    DeleteFileMethodType_InputArguments = 13349,
    MoveOrCopyMethodType = 13350,
    MoveOrCopyMethodType_InputArguments = 13351,
    MoveOrCopyMethodType_OutputArguments = 13352,
    FileDirectoryType = 13353,
    FileDirectoryType_FileDirectoryName_Placeholder = 13354,
    FileDirectoryType_FileDirectoryName_Placeholder_CreateDirectory = 13355,
    FileDirectoryType_FileDirectoryName_Placeholder_CreateDirectory_InputArguments = 13356,
    FileDirectoryType_FileDirectoryName_Placeholder_CreateDirectory_OutputArguments = 13357,
    FileDirectoryType_FileDirectoryName_Placeholder_CreateFile = 13358,
    FileDirectoryType_FileDirectoryName_Placeholder_CreateFile_InputArguments = 13359,
    FileDirectoryType_FileDirectoryName_Placeholder_CreateFile_OutputArguments = 13360,
    FileDirectoryType_FileDirectoryName_Placeholder_MoveOrCopy = 13363,
    FileDirectoryType_FileDirectoryName_Placeholder_MoveOrCopy_InputArguments = 13364,
    FileDirectoryType_FileDirectoryName_Placeholder_MoveOrCopy_OutputArguments = 13365,
    FileDirectoryType_FileName_Placeholder = 13366,
    FileDirectoryType_FileName_Placeholder_Size = 13367,
    FileDirectoryType_FileName_Placeholder_Writable = 13368,
    FileDirectoryType_FileName_Placeholder_UserWritable = 13369,
    FileDirectoryType_FileName_Placeholder_OpenCount = 13370,
    FileDirectoryType_FileName_Placeholder_MimeType = 13371,
    FileDirectoryType_FileName_Placeholder_Open = 13372,
    FileDirectoryType_FileName_Placeholder_Open_InputArguments = 13373,
    FileDirectoryType_FileName_Placeholder_Open_OutputArguments = 13374,
    FileDirectoryType_FileName_Placeholder_Close = 13375,
    FileDirectoryType_FileName_Placeholder_Close_InputArguments = 13376,
    FileDirectoryType_FileName_Placeholder_Read = 13377,
    FileDirectoryType_FileName_Placeholder_Read_InputArguments = 13378,
    FileDirectoryType_FileName_Placeholder_Read_OutputArguments = 13379,
    FileDirectoryType_FileName_Placeholder_Write = 13380,
    FileDirectoryType_FileName_Placeholder_Write_InputArguments = 13381,
    FileDirectoryType_FileName_Placeholder_GetPosition = 13382,
    FileDirectoryType_FileName_Placeholder_GetPosition_InputArguments = 13383,
    FileDirectoryType_FileName_Placeholder_GetPosition_OutputArguments = 13384,
    FileDirectoryType_FileName_Placeholder_SetPosition = 13385,
    FileDirectoryType_FileName_Placeholder_SetPosition_InputArguments = 13386,
    FileDirectoryType_CreateDirectory = 13387,
    FileDirectoryType_CreateDirectory_InputArguments = 13388,
    FileDirectoryType_CreateDirectory_OutputArguments = 13389,
    FileDirectoryType_CreateFile = 13390,
    FileDirectoryType_CreateFile_InputArguments = 13391,
    FileDirectoryType_CreateFile_OutputArguments = 13392,
    FileDirectoryType_DeleteFileSystemObject = 13393,
    FileDirectoryType_DeleteFileSystemObject_InputArguments = 13394,
    FileDirectoryType_MoveOrCopy = 13395,
    FileDirectoryType_MoveOrCopy_InputArguments = 13396,
    FileDirectoryType_MoveOrCopy_OutputArguments = 13397,
    AddressSpaceFileType_MimeType = 13398,
    NamespaceMetadataType_NamespaceFile_MimeType = 13399,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_MimeType = 13400,
    TrustListType_MimeType = 13403,
    CertificateGroupType_TrustList = 13599,
    CertificateGroupType_TrustList_Size = 13600,
    CertificateGroupType_TrustList_Writable = 13601,
    CertificateGroupType_TrustList_UserWritable = 13602,
    CertificateGroupType_TrustList_OpenCount = 13603,
    CertificateGroupType_TrustList_MimeType = 13604,
    CertificateGroupType_TrustList_Open = 13605,
    CertificateGroupType_TrustList_Open_InputArguments = 13606,
    CertificateGroupType_TrustList_Open_OutputArguments = 13607,
    CertificateGroupType_TrustList_Close = 13608,
    CertificateGroupType_TrustList_Close_InputArguments = 13609,
    CertificateGroupType_TrustList_Read = 13610,
    CertificateGroupType_TrustList_Read_InputArguments = 13611,
    CertificateGroupType_TrustList_Read_OutputArguments = 13612,
    CertificateGroupType_TrustList_Write = 13613,
    CertificateGroupType_TrustList_Write_InputArguments = 13614,
    CertificateGroupType_TrustList_GetPosition = 13615,
    CertificateGroupType_TrustList_GetPosition_InputArguments = 13616,
    CertificateGroupType_TrustList_GetPosition_OutputArguments = 13617,
    CertificateGroupType_TrustList_SetPosition = 13618,
    CertificateGroupType_TrustList_SetPosition_InputArguments = 13619,
    CertificateGroupType_TrustList_LastUpdateTime = 13620,
    CertificateGroupType_TrustList_OpenWithMasks = 13621,
    CertificateGroupType_TrustList_OpenWithMasks_InputArguments = 13622,
    CertificateGroupType_TrustList_OpenWithMasks_OutputArguments = 13623,
    CertificateGroupType_TrustList_CloseAndUpdate = 13624,
    CertificateGroupType_TrustList_CloseAndUpdate_InputArguments = 13625,
    CertificateGroupType_TrustList_CloseAndUpdate_OutputArguments = 13626,
    CertificateGroupType_TrustList_AddCertificate = 13627,
    CertificateGroupType_TrustList_AddCertificate_InputArguments = 13628,
    CertificateGroupType_TrustList_RemoveCertificate = 13629,
    CertificateGroupType_TrustList_RemoveCertificate_InputArguments = 13630,
    CertificateGroupType_CertificateTypes = 13631,
    CertificateUpdatedAuditEventType_CertificateGroup = 13735,
    CertificateUpdatedAuditEventType_CertificateType = 13736,
    ServerConfiguration_UpdateCertificate = 13737,
    ServerConfiguration_UpdateCertificate_InputArguments = 13738,
    ServerConfiguration_UpdateCertificate_OutputArguments = 13739,
    CertificateGroupFolderType = 13813,
    CertificateGroupFolderType_DefaultApplicationGroup = 13814,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList = 13815,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Size = 13816,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Writable = 13817,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_UserWritable = 13818,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_OpenCount = 13819,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_MimeType = 13820,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Open = 13821,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Open_InputArguments = 13822,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Open_OutputArguments = 13823,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Close = 13824,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Close_InputArguments = 13825,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Read = 13826,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Read_InputArguments = 13827,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Read_OutputArguments = 13828,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Write = 13829,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_Write_InputArguments = 13830,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_GetPosition = 13831,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_GetPosition_InputArguments = 13832,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_GetPosition_OutputArguments = 13833,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_SetPosition = 13834,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_SetPosition_InputArguments = 13835,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_LastUpdateTime = 13836,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_OpenWithMasks = 13837,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_OpenWithMasks_InputArguments = 13838,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_OpenWithMasks_OutputArguments = 13839,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_CloseAndUpdate = 13840,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_CloseAndUpdate_InputArguments = 13841,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_CloseAndUpdate_OutputArguments = 13842,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_AddCertificate = 13843,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_AddCertificate_InputArguments = 13844,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_RemoveCertificate = 13845,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_RemoveCertificate_InputArguments = 13846,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateTypes = 13847,
    CertificateGroupFolderType_DefaultHttpsGroup = 13848,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList = 13849,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Size = 13850,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Writable = 13851,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_UserWritable = 13852,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_OpenCount = 13853,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_MimeType = 13854,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Open = 13855,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Open_InputArguments = 13856,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Open_OutputArguments = 13857,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Close = 13858,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Close_InputArguments = 13859,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Read = 13860,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Read_InputArguments = 13861,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Read_OutputArguments = 13862,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Write = 13863,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_Write_InputArguments = 13864,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_GetPosition = 13865,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_GetPosition_InputArguments = 13866,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_GetPosition_OutputArguments = 13867,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_SetPosition = 13868,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_SetPosition_InputArguments = 13869,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_LastUpdateTime = 13870,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_OpenWithMasks = 13871,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_OpenWithMasks_InputArguments = 13872,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_OpenWithMasks_OutputArguments = 13873,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_CloseAndUpdate = 13874,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_CloseAndUpdate_InputArguments = 13875,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_CloseAndUpdate_OutputArguments = 13876,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_AddCertificate = 13877,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_AddCertificate_InputArguments = 13878,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_RemoveCertificate = 13879,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_RemoveCertificate_InputArguments = 13880,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateTypes = 13881,
    CertificateGroupFolderType_DefaultUserTokenGroup = 13882,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList = 13883,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Size = 13884,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Writable = 13885,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_UserWritable = 13886,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_OpenCount = 13887,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_MimeType = 13888,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Open = 13889,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Open_InputArguments = 13890,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Open_OutputArguments = 13891,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Close = 13892,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Close_InputArguments = 13893,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Read = 13894,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Read_InputArguments = 13895,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Read_OutputArguments = 13896,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Write = 13897,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_Write_InputArguments = 13898,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_GetPosition = 13899,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_GetPosition_InputArguments = 13900,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_GetPosition_OutputArguments = 13901,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_SetPosition = 13902,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_SetPosition_InputArguments = 13903,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_LastUpdateTime = 13904,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_OpenWithMasks = 13905,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_OpenWithMasks_InputArguments = 13906,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_OpenWithMasks_OutputArguments = 13907,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_CloseAndUpdate = 13908,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_CloseAndUpdate_InputArguments = 13909,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_CloseAndUpdate_OutputArguments = 13910,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_AddCertificate = 13911,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_AddCertificate_InputArguments = 13912,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_RemoveCertificate = 13913,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_RemoveCertificate_InputArguments = 13914,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateTypes = 13915,
    CertificateGroupFolderType_AdditionalGroup_Placeholder = 13916,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList = 13917,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Size = 13918,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Writable = 13919,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_UserWritable = 13920,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_OpenCount = 13921,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_MimeType = 13922,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Open = 13923,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Open_InputArguments = 13924,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Open_OutputArguments = 13925,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Close = 13926,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Close_InputArguments = 13927,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Read = 13928,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Read_InputArguments = 13929,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Read_OutputArguments = 13930,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Write = 13931,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_Write_InputArguments = 13932,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_GetPosition = 13933,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_GetPosition_InputArguments = 13934,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_GetPosition_OutputArguments = 13935,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_SetPosition = 13936,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_SetPosition_InputArguments = 13937,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_LastUpdateTime = 13938,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_OpenWithMasks = 13939,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_OpenWithMasks_InputArguments = 13940,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_OpenWithMasks_OutputArguments = 13941,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_CloseAndUpdate = 13942,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_CloseAndUpdate_InputArguments = 13943,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_CloseAndUpdate_OutputArguments = 13944,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_AddCertificate = 13945,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_AddCertificate_InputArguments = 13946,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_RemoveCertificate = 13947,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_RemoveCertificate_InputArguments = 13948,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateTypes = 13949,
    ServerConfigurationType_CertificateGroups = 13950,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup = 13951,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList = 13952,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Size = 13953,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Writable = 13954,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_UserWritable = 13955,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_OpenCount = 13956,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_MimeType = 13957,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Open = 13958,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Open_InputArguments = 13959,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Open_OutputArguments = 13960,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Close = 13961,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Close_InputArguments = 13962,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Read = 13963,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Read_InputArguments = 13964,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Read_OutputArguments = 13965,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Write = 13966,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_Write_InputArguments = 13967,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_GetPosition = 13968,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_GetPosition_InputArguments = 13969,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_GetPosition_OutputArguments = 13970,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_SetPosition = 13971,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_SetPosition_InputArguments = 13972,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_LastUpdateTime = 13973,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_OpenWithMasks = 13974,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_OpenWithMasks_InputArguments = 13975,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_OpenWithMasks_OutputArguments = 13976,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_CloseAndUpdate = 13977,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_CloseAndUpdate_InputArguments = 13978,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_CloseAndUpdate_OutputArguments = 13979,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_AddCertificate = 13980,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_AddCertificate_InputArguments = 13981,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_RemoveCertificate = 13982,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_RemoveCertificate_InputArguments = 13983,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateTypes = 13984,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup = 13985,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList = 13986,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Size = 13987,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Writable = 13988,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_UserWritable = 13989,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_OpenCount = 13990,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_MimeType = 13991,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Open = 13992,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Open_InputArguments = 13993,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Open_OutputArguments = 13994,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Close = 13995,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Close_InputArguments = 13996,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Read = 13997,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Read_InputArguments = 13998,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Read_OutputArguments = 13999,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Write = 14000,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_Write_InputArguments = 14001,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_GetPosition = 14002,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_GetPosition_InputArguments = 14003,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_GetPosition_OutputArguments = 14004,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_SetPosition = 14005,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_SetPosition_InputArguments = 14006,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_LastUpdateTime = 14007,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_OpenWithMasks = 14008,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_OpenWithMasks_InputArguments = 14009,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_OpenWithMasks_OutputArguments = 14010,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_CloseAndUpdate = 14011,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_CloseAndUpdate_InputArguments = 14012,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_CloseAndUpdate_OutputArguments = 14013,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_AddCertificate = 14014,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_AddCertificate_InputArguments = 14015,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_RemoveCertificate = 14016,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_RemoveCertificate_InputArguments = 14017,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateTypes = 14018,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup = 14019,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList = 14020,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Size = 14021,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Writable = 14022,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_UserWritable = 14023,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_OpenCount = 14024,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_MimeType = 14025,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Open = 14026,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Open_InputArguments = 14027,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Open_OutputArguments = 14028,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Close = 14029,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Close_InputArguments = 14030,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Read = 14031,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Read_InputArguments = 14032,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Read_OutputArguments = 14033,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Write = 14034,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_Write_InputArguments = 14035,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_GetPosition = 14036,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_GetPosition_InputArguments = 14037,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_GetPosition_OutputArguments = 14038,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_SetPosition = 14039,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_SetPosition_InputArguments = 14040,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_LastUpdateTime = 14041,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_OpenWithMasks = 14042,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_OpenWithMasks_InputArguments = 14043,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_OpenWithMasks_OutputArguments = 14044,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_CloseAndUpdate = 14045,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_CloseAndUpdate_InputArguments = 14046,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_CloseAndUpdate_OutputArguments = 14047,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_AddCertificate = 14048,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_AddCertificate_InputArguments = 14049,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_RemoveCertificate = 14050,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_RemoveCertificate_InputArguments = 14051,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateTypes = 14052,
    ServerConfiguration_CertificateGroups = 14053,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup = 14088,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList = 14089,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Size = 14090,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Writable = 14091,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_UserWritable = 14092,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_OpenCount = 14093,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_MimeType = 14094,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Open = 14095,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Open_InputArguments = 14096,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Open_OutputArguments = 14097,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Close = 14098,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Close_InputArguments = 14099,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Read = 14100,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Read_InputArguments = 14101,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Read_OutputArguments = 14102,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Write = 14103,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_Write_InputArguments = 14104,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_GetPosition = 14105,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_GetPosition_InputArguments = 14106,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_GetPosition_OutputArguments = 14107,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_SetPosition = 14108,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_SetPosition_InputArguments = 14109,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_LastUpdateTime = 14110,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_OpenWithMasks = 14111,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_OpenWithMasks_InputArguments = 14112,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_OpenWithMasks_OutputArguments = 14113,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_CloseAndUpdate = 14114,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_CloseAndUpdate_InputArguments = 14115,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_CloseAndUpdate_OutputArguments = 14116,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_AddCertificate = 14117,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_AddCertificate_InputArguments = 14118,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_RemoveCertificate = 14119,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_RemoveCertificate_InputArguments = 14120,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateTypes = 14121,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup = 14122,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList = 14123,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Size = 14124,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Writable = 14125,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_UserWritable = 14126,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_OpenCount = 14127,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_MimeType = 14128,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Open = 14129,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Open_InputArguments = 14130,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Open_OutputArguments = 14131,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Close = 14132,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Close_InputArguments = 14133,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Read = 14134,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Read_InputArguments = 14135,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Read_OutputArguments = 14136,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Write = 14137,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_Write_InputArguments = 14138,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_GetPosition = 14139,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_GetPosition_InputArguments = 14140,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_GetPosition_OutputArguments = 14141,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_SetPosition = 14142,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_SetPosition_InputArguments = 14143,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_LastUpdateTime = 14144,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_OpenWithMasks = 14145,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_OpenWithMasks_InputArguments = 14146,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_OpenWithMasks_OutputArguments = 14147,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_CloseAndUpdate = 14148,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_CloseAndUpdate_InputArguments = 14149,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_CloseAndUpdate_OutputArguments = 14150,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_AddCertificate = 14151,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_AddCertificate_InputArguments = 14152,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_RemoveCertificate = 14153,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_RemoveCertificate_InputArguments = 14154,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateTypes = 14155,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup = 14156,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_Writable = 14157,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_UserWritable = 14158,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_MimeType = 14159,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_CloseAndUpdate_InputArguments = 14160,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateTypes = 14161,
    RemoveConnectionMethodType = 14183,
    RemoveConnectionMethodType_InputArguments = 14184,
    PubSubConnectionType = 14209,
    PubSubConnectionType_Address = 14221,
    PubSubConnectionType_RemoveGroup = 14225,
    PubSubConnectionType_RemoveGroup_InputArguments = 14226,
    PubSubGroupType = 14232,
    PublishedVariableDataType = 14273,
    PublishedVariableDataType_Encoding_DefaultBinary = 14323,
    OpcUa_BinarySchema_PublishedVariableDataType = 14324,
    OpcUa_BinarySchema_PublishedVariableDataType_DataTypeVersion = 14325,
    OpcUa_BinarySchema_PublishedVariableDataType_DictionaryFragment = 14326,
    AuditCreateSessionEventType_SessionId = 14413,
    AuditUrlMismatchEventType_SessionId = 14414,
    Server_ServerRedundancy_ServerNetworkGroups = 14415,
    PublishSubscribeType = 14416,
    PublishSubscribeType_ConnectionName_Placeholder = 14417,
    PublishSubscribeType_ConnectionName_Placeholder_PublisherId = 14418,
    PublishSubscribeType_ConnectionName_Placeholder_Status = 14419,
    PublishSubscribeType_ConnectionName_Placeholder_Status_State = 14420,
    PublishSubscribeType_ConnectionName_Placeholder_Status_Enable = 14421,
    PublishSubscribeType_ConnectionName_Placeholder_Status_Disable = 14422,
    PublishSubscribeType_ConnectionName_Placeholder_Address = 14423,
    PublishSubscribeType_ConnectionName_Placeholder_RemoveGroup = 14424,
    PublishSubscribeType_ConnectionName_Placeholder_RemoveGroup_InputArguments = 14425,
    PublishSubscribeType_RemoveConnection = 14432,
    PublishSubscribeType_RemoveConnection_InputArguments = 14433,
    PublishSubscribeType_PublishedDataSets = 14434,
    PublishSubscribeType_PublishedDataSets_AddPublishedDataItems = 14435,
    PublishSubscribeType_PublishedDataSets_AddPublishedDataItems_InputArguments = 14436,
    PublishSubscribeType_PublishedDataSets_AddPublishedDataItems_OutputArguments = 14437,
    PublishSubscribeType_PublishedDataSets_AddPublishedEvents = 14438,
    PublishSubscribeType_PublishedDataSets_AddPublishedEvents_InputArguments = 14439,
    PublishSubscribeType_PublishedDataSets_AddPublishedEvents_OutputArguments = 14440,
    PublishSubscribeType_PublishedDataSets_RemovePublishedDataSet = 14441,
    PublishSubscribeType_PublishedDataSets_RemovePublishedDataSet_InputArguments = 14442,
    PublishSubscribe = 14443,
    HasPubSubConnection = 14476,
    DataSetFolderType = 14477,
    DataSetFolderType_DataSetFolderName_Placeholder = 14478,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedDataItems = 14479,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedDataItems_InputArguments = 14480,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedDataItems_OutputArguments = 14481,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedEvents = 14482,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedEvents_InputArguments = 14483,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedEvents_OutputArguments = 14484,
    DataSetFolderType_DataSetFolderName_Placeholder_RemovePublishedDataSet = 14485,
    DataSetFolderType_DataSetFolderName_Placeholder_RemovePublishedDataSet_InputArguments = 14486,
    DataSetFolderType_PublishedDataSetName_Placeholder = 14487,
    DataSetFolderType_PublishedDataSetName_Placeholder_ConfigurationVersion = 14489,
    DataSetFolderType_AddPublishedDataItems = 14493,
    DataSetFolderType_AddPublishedDataItems_InputArguments = 14494,
    DataSetFolderType_AddPublishedDataItems_OutputArguments = 14495,
    DataSetFolderType_AddPublishedEvents = 14496,
    DataSetFolderType_AddPublishedEvents_InputArguments = 14497,
    DataSetFolderType_AddPublishedEvents_OutputArguments = 14498,
    DataSetFolderType_RemovePublishedDataSet = 14499,
    DataSetFolderType_RemovePublishedDataSet_InputArguments = 14500,
    AddPublishedDataItemsMethodType = 14501,
    AddPublishedDataItemsMethodType_InputArguments = 14502,
    AddPublishedDataItemsMethodType_OutputArguments = 14503,
    AddPublishedEventsMethodType = 14504,
    AddPublishedEventsMethodType_InputArguments = 14505,
    AddPublishedEventsMethodType_OutputArguments = 14506,
    RemovePublishedDataSetMethodType = 14507,
    RemovePublishedDataSetMethodType_InputArguments = 14508,
    PublishedDataSetType = 14509,
    PublishedDataSetType_ConfigurationVersion = 14519,
    DataSetMetaDataType = 14523,
    FieldMetaData = 14524,
    DataTypeDescription = 14525,
    StructureType_EnumStrings = 14528,
    KeyValuePair = 14533,
    PublishedDataItemsType = 14534,
    PublishedDataItemsType_ConfigurationVersion = 14544,
    PublishedDataItemsType_PublishedData = 14548,
    PublishedDataItemsType_AddVariables = 14555,
    PublishedDataItemsType_AddVariables_InputArguments = 14556,
    PublishedDataItemsType_AddVariables_OutputArguments = 14557,
    PublishedDataItemsType_RemoveVariables = 14558,
    PublishedDataItemsType_RemoveVariables_InputArguments = 14559,
    PublishedDataItemsType_RemoveVariables_OutputArguments = 14560,
    PublishedDataItemsAddVariablesMethodType = 14564,
    PublishedDataItemsAddVariablesMethodType_InputArguments = 14565,
    PublishedDataItemsAddVariablesMethodType_OutputArguments = 14566,
    PublishedDataItemsRemoveVariablesMethodType = 14567,
    PublishedDataItemsRemoveVariablesMethodType_InputArguments = 14568,
    PublishedDataItemsRemoveVariablesMethodType_OutputArguments = 14569,
    PublishedEventsType = 14572,
    PublishedEventsType_ConfigurationVersion = 14582,
    PublishedEventsType_PubSubEventNotifier = 14586,
    PublishedEventsType_SelectedFields = 14587,
    PublishedEventsType_Filter = 14588,
    ConfigurationVersionDataType = 14593,
    PubSubConnectionType_PublisherId = 14595,
    PubSubConnectionType_Status = 14600,
    PubSubConnectionType_Status_State = 14601,
    PubSubConnectionType_Status_Enable = 14602,
    PubSubConnectionType_Status_Disable = 14603,
    PubSubConnectionTypeRemoveGroupMethodType = 14604,
    PubSubConnectionTypeRemoveGroupMethodType_InputArguments = 14605,
    PubSubGroupTypeRemoveWriterMethodType = 14623,
    PubSubGroupTypeRemoveWriterMethodType_InputArguments = 14624,
    PubSubGroupTypeRemoveReaderMethodType = 14625,
    PubSubGroupTypeRemoveReaderMethodType_InputArguments = 14626,
    PubSubStatusType = 14643,
    PubSubStatusType_State = 14644,
    PubSubStatusType_Enable = 14645,
    PubSubStatusType_Disable = 14646,
    PubSubState = 14647,
    PubSubState_EnumStrings = 14648,
    FieldTargetDataType = 14744,
    FieldMetaData_Encoding_DefaultBinary = 14839,
    StructureField_Encoding_DefaultBinary = 14844,
    EnumField_Encoding_DefaultBinary = 14845,
    KeyValuePair_Encoding_DefaultBinary = 14846,
    ConfigurationVersionDataType_Encoding_DefaultBinary = 14847,
    FieldTargetDataType_Encoding_DefaultBinary = 14848,
    OpcUa_BinarySchema_DataSetMetaDataType = 14849,
    OpcUa_BinarySchema_DataSetMetaDataType_DataTypeVersion = 14850,
    OpcUa_BinarySchema_DataSetMetaDataType_DictionaryFragment = 14851,
    OpcUa_BinarySchema_FieldMetaData = 14852,
    OpcUa_BinarySchema_FieldMetaData_DataTypeVersion = 14853,
    OpcUa_BinarySchema_FieldMetaData_DictionaryFragment = 14854,
    OpcUa_BinarySchema_DataTypeDescription = 14855,
    OpcUa_BinarySchema_DataTypeDescription_DataTypeVersion = 14856,
    OpcUa_BinarySchema_DataTypeDescription_DictionaryFragment = 14857,
    OpcUa_BinarySchema_EnumField = 14870,
    OpcUa_BinarySchema_EnumField_DataTypeVersion = 14871,
    OpcUa_BinarySchema_EnumField_DictionaryFragment = 14872,
    OpcUa_BinarySchema_KeyValuePair = 14873,
    OpcUa_BinarySchema_KeyValuePair_DataTypeVersion = 14874,
    OpcUa_BinarySchema_KeyValuePair_DictionaryFragment = 14875,
    OpcUa_BinarySchema_ConfigurationVersionDataType = 14876,
    OpcUa_BinarySchema_ConfigurationVersionDataType_DataTypeVersion = 14877,
    OpcUa_BinarySchema_ConfigurationVersionDataType_DictionaryFragment = 14878,
    OpcUa_BinarySchema_FieldTargetDataType_DataTypeVersion = 14880,
    OpcUa_BinarySchema_FieldTargetDataType_DictionaryFragment = 14881,
    CertificateExpirationAlarmType_ExpirationLimit = 14900,
    DataSetToWriter = 14936,
    DataTypeDictionaryType_Deprecated = 15001,
    MaxCharacters = 15002,
    ServerType_UrisVersion = 15003,
    Server_UrisVersion = 15004,
    SimpleTypeDescription = 15005,
    UABinaryFileDataType = 15006,
    BrokerConnectionTransportDataType = 15007,
    BrokerTransportQualityOfService = 15008,
    BrokerTransportQualityOfService_EnumStrings = 15009,
    SecurityGroupFolderType_SecurityGroupName_Placeholder_KeyLifetime = 15010,
    SecurityGroupFolderType_SecurityGroupName_Placeholder_SecurityPolicyUri = 15011,
    SecurityGroupFolderType_SecurityGroupName_Placeholder_MaxFutureKeyCount = 15012,
    AuditConditionResetEventType = 15013,
    AuditConditionResetEventType_EventId = 15014,
    AuditConditionResetEventType_EventType = 15015,
    AuditConditionResetEventType_SourceNode = 15016,
    AuditConditionResetEventType_SourceName = 15017,
    AuditConditionResetEventType_Time = 15018,
    AuditConditionResetEventType_ReceiveTime = 15019,
    AuditConditionResetEventType_LocalTime = 15020,
    AuditConditionResetEventType_Message = 15021,
    AuditConditionResetEventType_Severity = 15022,
    AuditConditionResetEventType_ActionTimeStamp = 15023,
    AuditConditionResetEventType_Status = 15024,
    AuditConditionResetEventType_ServerId = 15025,
    AuditConditionResetEventType_ClientAuditEntryId = 15026,
    AuditConditionResetEventType_ClientUserId = 15027,
    AuditConditionResetEventType_MethodId = 15028,
    AuditConditionResetEventType_InputArguments = 15029,
    PermissionType_OptionSetValues = 15030,
    AccessLevelType = 15031,
    AccessLevelType_OptionSetValues = 15032,
    EventNotifierType = 15033,
    EventNotifierType_OptionSetValues = 15034,
    AccessRestrictionType_OptionSetValues = 15035,
    AttributeWriteMask_OptionSetValues = 15036,
    OpcUa_BinarySchema_Deprecated = 15037,
    ProgramStateMachineType_ProgramDiagnostic_LastMethodInputValues = 15038,
    ProgramStateMachineType_ProgramDiagnostic_LastMethodOutputValues = 15040,
    KeyValuePair_Encoding_DefaultJson = 15041,
    IdentityMappingRuleType_Encoding_DefaultJson = 15042,
    SecurityGroupFolderType_SecurityGroupName_Placeholder_MaxPastKeyCount = 15043,
    TrustListDataType_Encoding_DefaultJson = 15044,
    DecimalDataType_Encoding_DefaultJson = 15045,
    SecurityGroupType_KeyLifetime = 15046,
    SecurityGroupType_SecurityPolicyUri = 15047,
    SecurityGroupType_MaxFutureKeyCount = 15048,
    ConfigurationVersionDataType_Encoding_DefaultJson = 15049,
    DataSetMetaDataType_Encoding_DefaultJson = 15050,
    FieldMetaData_Encoding_DefaultJson = 15051,
    PublishedEventsType_ModifyFieldSelection = 15052,
    PublishedEventsType_ModifyFieldSelection_InputArguments = 15053,
    PublishedEventsTypeModifyFieldSelectionMethodType = 15054,
    PublishedEventsTypeModifyFieldSelectionMethodType_InputArguments = 15055,
    SecurityGroupType_MaxPastKeyCount = 15056,
    DataTypeDescription_Encoding_DefaultJson = 15057,
    StructureDescription_Encoding_DefaultJson = 15058,
    EnumDescription_Encoding_DefaultJson = 15059,
    PublishedVariableDataType_Encoding_DefaultJson = 15060,
    FieldTargetDataType_Encoding_DefaultJson = 15061,
    RolePermissionType_Encoding_DefaultJson = 15062,
    DataTypeDefinition_Encoding_DefaultJson = 15063,
    DatagramConnectionTransportType = 15064,
    StructureField_Encoding_DefaultJson = 15065,
    StructureDefinition_Encoding_DefaultJson = 15066,
    EnumDefinition_Encoding_DefaultJson = 15067,
    Node_Encoding_DefaultJson = 15068,
    InstanceNode_Encoding_DefaultJson = 15069,
    TypeNode_Encoding_DefaultJson = 15070,
    ObjectNode_Encoding_DefaultJson = 15071,
    DatagramConnectionTransportType_DiscoveryAddress = 15072,
    ObjectTypeNode_Encoding_DefaultJson = 15073,
    VariableNode_Encoding_DefaultJson = 15074,
    VariableTypeNode_Encoding_DefaultJson = 15075,
    ReferenceTypeNode_Encoding_DefaultJson = 15076,
    MethodNode_Encoding_DefaultJson = 15077,
    ViewNode_Encoding_DefaultJson = 15078,
    DataTypeNode_Encoding_DefaultJson = 15079,
    ReferenceNode_Encoding_DefaultJson = 15080,
    Argument_Encoding_DefaultJson = 15081,
    EnumValueType_Encoding_DefaultJson = 15082,
    EnumField_Encoding_DefaultJson = 15083,
    OptionSet_Encoding_DefaultJson = 15084,
    Union_Encoding_DefaultJson = 15085,
    TimeZoneDataType_Encoding_DefaultJson = 15086,
    ApplicationDescription_Encoding_DefaultJson = 15087,
    RequestHeader_Encoding_DefaultJson = 15088,
    ResponseHeader_Encoding_DefaultJson = 15089,
    ServiceFault_Encoding_DefaultJson = 15090,
    SessionlessInvokeRequestType_Encoding_DefaultJson = 15091,
    SessionlessInvokeResponseType_Encoding_DefaultJson = 15092,
    FindServersRequest_Encoding_DefaultJson = 15093,
    FindServersResponse_Encoding_DefaultJson = 15094,
    ServerOnNetwork_Encoding_DefaultJson = 15095,
    FindServersOnNetworkRequest_Encoding_DefaultJson = 15096,
    FindServersOnNetworkResponse_Encoding_DefaultJson = 15097,
    UserTokenPolicy_Encoding_DefaultJson = 15098,
    EndpointDescription_Encoding_DefaultJson = 15099,
    GetEndpointsRequest_Encoding_DefaultJson = 15100,
    GetEndpointsResponse_Encoding_DefaultJson = 15101,
    RegisteredServer_Encoding_DefaultJson = 15102,
    RegisterServerRequest_Encoding_DefaultJson = 15103,
    RegisterServerResponse_Encoding_DefaultJson = 15104,
    DiscoveryConfiguration_Encoding_DefaultJson = 15105,
    MdnsDiscoveryConfiguration_Encoding_DefaultJson = 15106,
    RegisterServer2Request_Encoding_DefaultJson = 15107,
    SubscribedDataSetType = 15108,
    ChoiceStateType = 15109,
    ChoiceStateType_StateNumber = 15110,
    TargetVariablesType = 15111,
    HasGuard = 15112,
    GuardVariableType = 15113,
    TargetVariablesType_TargetVariables = 15114,
    TargetVariablesType_AddTargetVariables = 15115,
    TargetVariablesType_AddTargetVariables_InputArguments = 15116,
    TargetVariablesType_AddTargetVariables_OutputArguments = 15117,
    TargetVariablesType_RemoveTargetVariables = 15118,
    TargetVariablesType_RemoveTargetVariables_InputArguments = 15119,
    TargetVariablesType_RemoveTargetVariables_OutputArguments = 15120,
    TargetVariablesTypeAddTargetVariablesMethodType = 15121,
    TargetVariablesTypeAddTargetVariablesMethodType_InputArguments = 15122,
    TargetVariablesTypeAddTargetVariablesMethodType_OutputArguments = 15123,
    TargetVariablesTypeRemoveTargetVariablesMethodType = 15124,
    TargetVariablesTypeRemoveTargetVariablesMethodType_InputArguments = 15125,
    TargetVariablesTypeRemoveTargetVariablesMethodType_OutputArguments = 15126,
    SubscribedDataSetMirrorType = 15127,
    ExpressionGuardVariableType = 15128,
    ExpressionGuardVariableType_Expression = 15129,
    RegisterServer2Response_Encoding_DefaultJson = 15130,
    ChannelSecurityToken_Encoding_DefaultJson = 15131,
    OpenSecureChannelRequest_Encoding_DefaultJson = 15132,
    OpenSecureChannelResponse_Encoding_DefaultJson = 15133,
    CloseSecureChannelRequest_Encoding_DefaultJson = 15134,
    CloseSecureChannelResponse_Encoding_DefaultJson = 15135,
    SignedSoftwareCertificate_Encoding_DefaultJson = 15136,
    SignatureData_Encoding_DefaultJson = 15137,
    CreateSessionRequest_Encoding_DefaultJson = 15138,
    CreateSessionResponse_Encoding_DefaultJson = 15139,
    UserIdentityToken_Encoding_DefaultJson = 15140,
    AnonymousIdentityToken_Encoding_DefaultJson = 15141,
    UserNameIdentityToken_Encoding_DefaultJson = 15142,
    X509IdentityToken_Encoding_DefaultJson = 15143,
    IssuedIdentityToken_Encoding_DefaultJson = 15144,
    ActivateSessionRequest_Encoding_DefaultJson = 15145,
    ActivateSessionResponse_Encoding_DefaultJson = 15146,
    CloseSessionRequest_Encoding_DefaultJson = 15147,
    CloseSessionResponse_Encoding_DefaultJson = 15148,
    CancelRequest_Encoding_DefaultJson = 15149,
    CancelResponse_Encoding_DefaultJson = 15150,
    NodeAttributes_Encoding_DefaultJson = 15151,
    ObjectAttributes_Encoding_DefaultJson = 15152,
    VariableAttributes_Encoding_DefaultJson = 15153,
    DatagramConnectionTransportType_DiscoveryAddress_NetworkInterface = 15154,
    BrokerConnectionTransportType = 15155,
    BrokerConnectionTransportType_ResourceUri = 15156,
    MethodAttributes_Encoding_DefaultJson = 15157,
    ObjectTypeAttributes_Encoding_DefaultJson = 15158,
    VariableTypeAttributes_Encoding_DefaultJson = 15159,
    ReferenceTypeAttributes_Encoding_DefaultJson = 15160,
    DataTypeAttributes_Encoding_DefaultJson = 15161,
    ViewAttributes_Encoding_DefaultJson = 15162,
    GenericAttributeValue_Encoding_DefaultJson = 15163,
    GenericAttributes_Encoding_DefaultJson = 15164,
    AddNodesItem_Encoding_DefaultJson = 15165,
    AddNodesResult_Encoding_DefaultJson = 15166,
    AddNodesRequest_Encoding_DefaultJson = 15167,
    AddNodesResponse_Encoding_DefaultJson = 15168,
    AddReferencesItem_Encoding_DefaultJson = 15169,
    AddReferencesRequest_Encoding_DefaultJson = 15170,
    AddReferencesResponse_Encoding_DefaultJson = 15171,
    DeleteNodesItem_Encoding_DefaultJson = 15172,
    DeleteNodesRequest_Encoding_DefaultJson = 15173,
    DeleteNodesResponse_Encoding_DefaultJson = 15174,
    DeleteReferencesItem_Encoding_DefaultJson = 15175,
    DeleteReferencesRequest_Encoding_DefaultJson = 15176,
    DeleteReferencesResponse_Encoding_DefaultJson = 15177,
    BrokerConnectionTransportType_AuthenticationProfileUri = 15178,
    ViewDescription_Encoding_DefaultJson = 15179,
    BrowseDescription_Encoding_DefaultJson = 15180,
    UserCredentialCertificateType = 15181,
    ReferenceDescription_Encoding_DefaultJson = 15182,
    BrowseResult_Encoding_DefaultJson = 15183,
    BrowseRequest_Encoding_DefaultJson = 15184,
    BrowseResponse_Encoding_DefaultJson = 15185,
    BrowseNextRequest_Encoding_DefaultJson = 15186,
    BrowseNextResponse_Encoding_DefaultJson = 15187,
    RelativePathElement_Encoding_DefaultJson = 15188,
    RelativePath_Encoding_DefaultJson = 15189,
    BrowsePath_Encoding_DefaultJson = 15190,
    BrowsePathTarget_Encoding_DefaultJson = 15191,
    BrowsePathResult_Encoding_DefaultJson = 15192,
    TranslateBrowsePathsToNodeIdsRequest_Encoding_DefaultJson = 15193,
    TranslateBrowsePathsToNodeIdsResponse_Encoding_DefaultJson = 15194,
    RegisterNodesRequest_Encoding_DefaultJson = 15195,
    RegisterNodesResponse_Encoding_DefaultJson = 15196,
    UnregisterNodesRequest_Encoding_DefaultJson = 15197,
    UnregisterNodesResponse_Encoding_DefaultJson = 15198,
    EndpointConfiguration_Encoding_DefaultJson = 15199,
    QueryDataDescription_Encoding_DefaultJson = 15200,
    NodeTypeDescription_Encoding_DefaultJson = 15201,
    QueryDataSet_Encoding_DefaultJson = 15202,
    NodeReference_Encoding_DefaultJson = 15203,
    ContentFilterElement_Encoding_DefaultJson = 15204,
    ContentFilter_Encoding_DefaultJson = 15205,
    FilterOperand_Encoding_DefaultJson = 15206,
    ElementOperand_Encoding_DefaultJson = 15207,
    LiteralOperand_Encoding_DefaultJson = 15208,
    AttributeOperand_Encoding_DefaultJson = 15209,
    SimpleAttributeOperand_Encoding_DefaultJson = 15210,
    ContentFilterElementResult_Encoding_DefaultJson = 15211,
    PublishSubscribeType_GetSecurityKeys = 15212,
    PublishSubscribeType_GetSecurityKeys_InputArguments = 15213,
    PublishSubscribeType_GetSecurityKeys_OutputArguments = 15214,
    PublishSubscribe_GetSecurityKeys = 15215,
    PublishSubscribe_GetSecurityKeys_InputArguments = 15216,
    PublishSubscribe_GetSecurityKeys_OutputArguments = 15217,
    GetSecurityKeysMethodType = 15218,
    GetSecurityKeysMethodType_InputArguments = 15219,
    GetSecurityKeysMethodType_OutputArguments = 15220,
    DataSetFolderType_PublishedDataSetName_Placeholder_DataSetMetaData = 15221,
    PublishedDataSetType_DataSetWriterName_Placeholder = 15222,
    PublishedDataSetType_DataSetWriterName_Placeholder_Status = 15223,
    PublishedDataSetType_DataSetWriterName_Placeholder_Status_State = 15224,
    PublishedDataSetType_DataSetWriterName_Placeholder_Status_Enable = 15225,
    PublishedDataSetType_DataSetWriterName_Placeholder_Status_Disable = 15226,
    PublishedDataSetType_DataSetWriterName_Placeholder_TransportSettings = 15227,
    ContentFilterResult_Encoding_DefaultJson = 15228,
    PublishedDataSetType_DataSetMetaData = 15229,
    PublishedDataItemsType_DataSetWriterName_Placeholder = 15230,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Status = 15231,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Status_State = 15232,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Status_Enable = 15233,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Status_Disable = 15234,
    PublishedDataItemsType_DataSetWriterName_Placeholder_TransportSettings = 15235,
    ParsingResult_Encoding_DefaultJson = 15236,
    PublishedDataItemsType_DataSetMetaData = 15237,
    PublishedEventsType_DataSetWriterName_Placeholder = 15238,
    PublishedEventsType_DataSetWriterName_Placeholder_Status = 15239,
    PublishedEventsType_DataSetWriterName_Placeholder_Status_State = 15240,
    PublishedEventsType_DataSetWriterName_Placeholder_Status_Enable = 15241,
    PublishedEventsType_DataSetWriterName_Placeholder_Status_Disable = 15242,
    PublishedEventsType_DataSetWriterName_Placeholder_TransportSettings = 15243,
    QueryFirstRequest_Encoding_DefaultJson = 15244,
    PublishedEventsType_DataSetMetaData = 15245,
    BrokerWriterGroupTransportType_ResourceUri = 15246,
    BrokerWriterGroupTransportType_AuthenticationProfileUri = 15247,
    CreateCredentialMethodType = 15248,
    BrokerWriterGroupTransportType_RequestedDeliveryGuarantee = 15249,
    BrokerDataSetWriterTransportType_ResourceUri = 15250,
    BrokerDataSetWriterTransportType_AuthenticationProfileUri = 15251,
    QueryFirstResponse_Encoding_DefaultJson = 15252,
    CreateCredentialMethodType_InputArguments = 15253,
    QueryNextRequest_Encoding_DefaultJson = 15254,
    QueryNextResponse_Encoding_DefaultJson = 15255,
    ReadValueId_Encoding_DefaultJson = 15256,
    ReadRequest_Encoding_DefaultJson = 15257,
    ReadResponse_Encoding_DefaultJson = 15258,
    HistoryReadValueId_Encoding_DefaultJson = 15259,
    HistoryReadResult_Encoding_DefaultJson = 15260,
    HistoryReadDetails_Encoding_DefaultJson = 15261,
    ReadEventDetails_Encoding_DefaultJson = 15262,
    ReadRawModifiedDetails_Encoding_DefaultJson = 15263,
    ReadProcessedDetails_Encoding_DefaultJson = 15264,
    PubSubGroupType_Status = 15265,
    PubSubGroupType_Status_State = 15266,
    PubSubGroupType_Status_Enable = 15267,
    PubSubGroupType_Status_Disable = 15268,
    ReadAtTimeDetails_Encoding_DefaultJson = 15269,
    HistoryData_Encoding_DefaultJson = 15270,
    ModificationInfo_Encoding_DefaultJson = 15271,
    HistoryModifiedData_Encoding_DefaultJson = 15272,
    HistoryEvent_Encoding_DefaultJson = 15273,
    HistoryReadRequest_Encoding_DefaultJson = 15274,
    HistoryReadResponse_Encoding_DefaultJson = 15275,
    WriteValue_Encoding_DefaultJson = 15276,
    WriteRequest_Encoding_DefaultJson = 15277,
    WriteResponse_Encoding_DefaultJson = 15278,
    HistoryUpdateDetails_Encoding_DefaultJson = 15279,
    UpdateDataDetails_Encoding_DefaultJson = 15280,
    UpdateStructureDataDetails_Encoding_DefaultJson = 15281,
    UpdateEventDetails_Encoding_DefaultJson = 15282,
    DeleteRawModifiedDetails_Encoding_DefaultJson = 15283,
    DeleteAtTimeDetails_Encoding_DefaultJson = 15284,
    DeleteEventDetails_Encoding_DefaultJson = 15285,
    HistoryUpdateResult_Encoding_DefaultJson = 15286,
    HistoryUpdateRequest_Encoding_DefaultJson = 15287,
    HistoryUpdateResponse_Encoding_DefaultJson = 15288,
    CallMethodRequest_Encoding_DefaultJson = 15289,
    CallMethodResult_Encoding_DefaultJson = 15290,
    CallRequest_Encoding_DefaultJson = 15291,
    CallResponse_Encoding_DefaultJson = 15292,
    MonitoringFilter_Encoding_DefaultJson = 15293,
    DataChangeFilter_Encoding_DefaultJson = 15294,
    EventFilter_Encoding_DefaultJson = 15295,
    HasDataSetWriter = 15296,
    HasDataSetReader = 15297,
    DataSetWriterType = 15298,
    DataSetWriterType_Status = 15299,
    DataSetWriterType_Status_State = 15300,
    DataSetWriterType_Status_Enable = 15301,
    DataSetWriterType_Status_Disable = 15302,
    DataSetWriterType_TransportSettings = 15303,
    AggregateConfiguration_Encoding_DefaultJson = 15304,
    DataSetWriterTransportType = 15305,
    DataSetReaderType = 15306,
    DataSetReaderType_Status = 15307,
    DataSetReaderType_Status_State = 15308,
    DataSetReaderType_Status_Enable = 15309,
    DataSetReaderType_Status_Disable = 15310,
    DataSetReaderType_TransportSettings = 15311,
    AggregateFilter_Encoding_DefaultJson = 15312,
    MonitoringFilterResult_Encoding_DefaultJson = 15313,
    EventFilterResult_Encoding_DefaultJson = 15314,
    AggregateFilterResult_Encoding_DefaultJson = 15315,
    DataSetReaderType_SubscribedDataSet = 15316,
    ElseGuardVariableType = 15317,
    BaseAnalogType = 15318,
    DataSetReaderTransportType = 15319,
    MonitoringParameters_Encoding_DefaultJson = 15320,
    MonitoredItemCreateRequest_Encoding_DefaultJson = 15321,
    MonitoredItemCreateResult_Encoding_DefaultJson = 15322,
    CreateMonitoredItemsRequest_Encoding_DefaultJson = 15323,
    CreateMonitoredItemsResponse_Encoding_DefaultJson = 15324,
    MonitoredItemModifyRequest_Encoding_DefaultJson = 15325,
    MonitoredItemModifyResult_Encoding_DefaultJson = 15326,
    ModifyMonitoredItemsRequest_Encoding_DefaultJson = 15327,
    ModifyMonitoredItemsResponse_Encoding_DefaultJson = 15328,
    SetMonitoringModeRequest_Encoding_DefaultJson = 15329,
    BrokerDataSetWriterTransportType_RequestedDeliveryGuarantee = 15330,
    SetMonitoringModeResponse_Encoding_DefaultJson = 15331,
    SetTriggeringRequest_Encoding_DefaultJson = 15332,
    SetTriggeringResponse_Encoding_DefaultJson = 15333,
    BrokerDataSetReaderTransportType_ResourceUri = 15334,
    DeleteMonitoredItemsRequest_Encoding_DefaultJson = 15335,
    DeleteMonitoredItemsResponse_Encoding_DefaultJson = 15336,
    CreateSubscriptionRequest_Encoding_DefaultJson = 15337,
    CreateSubscriptionResponse_Encoding_DefaultJson = 15338,
    ModifySubscriptionRequest_Encoding_DefaultJson = 15339,
    ModifySubscriptionResponse_Encoding_DefaultJson = 15340,
    SetPublishingModeRequest_Encoding_DefaultJson = 15341,
    SetPublishingModeResponse_Encoding_DefaultJson = 15342,
    NotificationMessage_Encoding_DefaultJson = 15343,
    NotificationData_Encoding_DefaultJson = 15344,
    DataChangeNotification_Encoding_DefaultJson = 15345,
    MonitoredItemNotification_Encoding_DefaultJson = 15346,
    EventNotificationList_Encoding_DefaultJson = 15347,
    EventFieldList_Encoding_DefaultJson = 15348,
    HistoryEventFieldList_Encoding_DefaultJson = 15349,
    StatusChangeNotification_Encoding_DefaultJson = 15350,
    SubscriptionAcknowledgement_Encoding_DefaultJson = 15351,
    PublishRequest_Encoding_DefaultJson = 15352,
    PublishResponse_Encoding_DefaultJson = 15353,
    RepublishRequest_Encoding_DefaultJson = 15354,
    RepublishResponse_Encoding_DefaultJson = 15355,
    TransferResult_Encoding_DefaultJson = 15356,
    TransferSubscriptionsRequest_Encoding_DefaultJson = 15357,
    TransferSubscriptionsResponse_Encoding_DefaultJson = 15358,
    DeleteSubscriptionsRequest_Encoding_DefaultJson = 15359,
    DeleteSubscriptionsResponse_Encoding_DefaultJson = 15360,
    BuildInfo_Encoding_DefaultJson = 15361,
    RedundantServerDataType_Encoding_DefaultJson = 15362,
    EndpointUrlListDataType_Encoding_DefaultJson = 15363,
    NetworkGroupDataType_Encoding_DefaultJson = 15364,
    SamplingIntervalDiagnosticsDataType_Encoding_DefaultJson = 15365,
    ServerDiagnosticsSummaryDataType_Encoding_DefaultJson = 15366,
    ServerStatusDataType_Encoding_DefaultJson = 15367,
    SessionDiagnosticsDataType_Encoding_DefaultJson = 15368,
    SessionSecurityDiagnosticsDataType_Encoding_DefaultJson = 15369,
    ServiceCounterDataType_Encoding_DefaultJson = 15370,
    StatusResult_Encoding_DefaultJson = 15371,
    SubscriptionDiagnosticsDataType_Encoding_DefaultJson = 15372,
    ModelChangeStructureDataType_Encoding_DefaultJson = 15373,
    SemanticChangeStructureDataType_Encoding_DefaultJson = 15374,
    Range_Encoding_DefaultJson = 15375,
    EUInformation_Encoding_DefaultJson = 15376,
    ComplexNumberType_Encoding_DefaultJson = 15377,
    DoubleComplexNumberType_Encoding_DefaultJson = 15378,
    AxisInformation_Encoding_DefaultJson = 15379,
    XVType_Encoding_DefaultJson = 15380,
    ProgramDiagnosticDataType_Encoding_DefaultJson = 15381,
    Annotation_Encoding_DefaultJson = 15382,
    ProgramDiagnostic2Type = 15383,
    ProgramDiagnostic2Type_CreateSessionId = 15384,
    ProgramDiagnostic2Type_CreateClientName = 15385,
    ProgramDiagnostic2Type_InvocationCreationTime = 15386,
    ProgramDiagnostic2Type_LastTransitionTime = 15387,
    ProgramDiagnostic2Type_LastMethodCall = 15388,
    ProgramDiagnostic2Type_LastMethodSessionId = 15389,
    ProgramDiagnostic2Type_LastMethodInputArguments = 15390,
    ProgramDiagnostic2Type_LastMethodOutputArguments = 15391,
    ProgramDiagnostic2Type_LastMethodInputValues = 15392,
    ProgramDiagnostic2Type_LastMethodOutputValues = 15393,
    ProgramDiagnostic2Type_LastMethodCallTime = 15394,
    ProgramDiagnostic2Type_LastMethodReturnStatus = 15395,
    ProgramDiagnostic2DataType = 15396,
    ProgramDiagnostic2DataType_Encoding_DefaultBinary = 15397,
    OpcUa_BinarySchema_ProgramDiagnostic2DataType = 15398,
    OpcUa_BinarySchema_ProgramDiagnostic2DataType_DataTypeVersion = 15399,
    OpcUa_BinarySchema_ProgramDiagnostic2DataType_DictionaryFragment = 15400,
    ProgramDiagnostic2DataType_Encoding_DefaultJson = 15405,
    AccessLevelExType = 15406,
    AccessLevelExType_OptionSetValues = 15407,
    RoleSetType_RoleName_Placeholder_ApplicationsExclude = 15408,
    RoleSetType_RoleName_Placeholder_EndpointsExclude = 15409,
    RoleType_ApplicationsExclude = 15410,
    RoleType_EndpointsExclude = 15411,
    WellKnownRole_Anonymous_ApplicationsExclude = 15412,
    WellKnownRole_Anonymous_EndpointsExclude = 15413,
    WellKnownRole_AuthenticatedUser_ApplicationsExclude = 15414,
    WellKnownRole_AuthenticatedUser_EndpointsExclude = 15415,
    WellKnownRole_Observer_ApplicationsExclude = 15416,
    WellKnownRole_Observer_EndpointsExclude = 15417,
    WellKnownRole_Operator_ApplicationsExclude = 15418,
    BrokerDataSetReaderTransportType_AuthenticationProfileUri = 15419,
    BrokerDataSetReaderTransportType_RequestedDeliveryGuarantee = 15420,
    SimpleTypeDescription_Encoding_DefaultBinary = 15421,
    UABinaryFileDataType_Encoding_DefaultBinary = 15422,
    WellKnownRole_Operator_EndpointsExclude = 15423,
    WellKnownRole_Engineer_ApplicationsExclude = 15424,
    WellKnownRole_Engineer_EndpointsExclude = 15425,
    WellKnownRole_Supervisor_ApplicationsExclude = 15426,
    WellKnownRole_Supervisor_EndpointsExclude = 15427,
    WellKnownRole_ConfigureAdmin_ApplicationsExclude = 15428,
    WellKnownRole_ConfigureAdmin_EndpointsExclude = 15429,
    WellKnownRole_SecurityAdmin_ApplicationsExclude = 15430,
    PublishSubscribeType_GetSecurityGroup = 15431,
    PublishSubscribeType_GetSecurityGroup_InputArguments = 15432,
    PublishSubscribeType_GetSecurityGroup_OutputArguments = 15433,
    PublishSubscribeType_SecurityGroups = 15434,
    PublishSubscribeType_SecurityGroups_AddSecurityGroup = 15435,
    PublishSubscribeType_SecurityGroups_AddSecurityGroup_InputArguments = 15436,
    PublishSubscribeType_SecurityGroups_AddSecurityGroup_OutputArguments = 15437,
    PublishSubscribeType_SecurityGroups_RemoveSecurityGroup = 15438,
    PublishSubscribeType_SecurityGroups_RemoveSecurityGroup_InputArguments = 15439,
    PublishSubscribe_GetSecurityGroup = 15440,
    PublishSubscribe_GetSecurityGroup_InputArguments = 15441,
    PublishSubscribe_GetSecurityGroup_OutputArguments = 15442,
    PublishSubscribe_SecurityGroups = 15443,
    PublishSubscribe_SecurityGroups_AddSecurityGroup = 15444,
    PublishSubscribe_SecurityGroups_AddSecurityGroup_InputArguments = 15445,
    PublishSubscribe_SecurityGroups_AddSecurityGroup_OutputArguments = 15446,
    PublishSubscribe_SecurityGroups_RemoveSecurityGroup = 15447,
    PublishSubscribe_SecurityGroups_RemoveSecurityGroup_InputArguments = 15448,
    GetSecurityGroupMethodType = 15449,
    GetSecurityGroupMethodType_InputArguments = 15450,
    GetSecurityGroupMethodType_OutputArguments = 15451,
    SecurityGroupFolderType = 15452,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder = 15453,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_AddSecurityGroup = 15454,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_AddSecurityGroup_InputArguments = 15455,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_AddSecurityGroup_OutputArguments = 15456,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_RemoveSecurityGroup = 15457,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_RemoveSecurityGroup_InputArguments = 15458,
    SecurityGroupFolderType_SecurityGroupName_Placeholder = 15459,
    SecurityGroupFolderType_SecurityGroupName_Placeholder_SecurityGroupId = 15460,
    SecurityGroupFolderType_AddSecurityGroup = 15461,
    SecurityGroupFolderType_AddSecurityGroup_InputArguments = 15462,
    SecurityGroupFolderType_AddSecurityGroup_OutputArguments = 15463,
    SecurityGroupFolderType_RemoveSecurityGroup = 15464,
    SecurityGroupFolderType_RemoveSecurityGroup_InputArguments = 15465,
    AddSecurityGroupMethodType = 15466,
    AddSecurityGroupMethodType_InputArguments = 15467,
    AddSecurityGroupMethodType_OutputArguments = 15468,
    RemoveSecurityGroupMethodType = 15469,
    RemoveSecurityGroupMethodType_InputArguments = 15470,
    SecurityGroupType = 15471,
    SecurityGroupType_SecurityGroupId = 15472,
    DataSetFolderType_PublishedDataSetName_Placeholder_ExtensionFields = 15473,
    DataSetFolderType_PublishedDataSetName_Placeholder_ExtensionFields_AddExtensionField = 15474,
    DataSetFolderType_PublishedDataSetName_Placeholder_ExtensionFields_AddExtensionField_InputArguments = 15475,
    DataSetFolderType_PublishedDataSetName_Placeholder_ExtensionFields_AddExtensionField_OutputArguments = 15476,
    DataSetFolderType_PublishedDataSetName_Placeholder_ExtensionFields_RemoveExtensionField = 15477,
    DataSetFolderType_PublishedDataSetName_Placeholder_ExtensionFields_RemoveExtensionField_InputArguments = 15478,
    BrokerConnectionTransportDataType_Encoding_DefaultBinary = 15479,
    WriterGroupDataType = 15480,
    PublishedDataSetType_ExtensionFields = 15481,
    PublishedDataSetType_ExtensionFields_AddExtensionField = 15482,
    PublishedDataSetType_ExtensionFields_AddExtensionField_InputArguments = 15483,
    PublishedDataSetType_ExtensionFields_AddExtensionField_OutputArguments = 15484,
    PublishedDataSetType_ExtensionFields_RemoveExtensionField = 15485,
    PublishedDataSetType_ExtensionFields_RemoveExtensionField_InputArguments = 15486,
    StructureDescription = 15487,
    EnumDescription = 15488,
    ExtensionFieldsType = 15489,
    ExtensionFieldsType_ExtensionFieldName_Placeholder = 15490,
    ExtensionFieldsType_AddExtensionField = 15491,
    ExtensionFieldsType_AddExtensionField_InputArguments = 15492,
    ExtensionFieldsType_AddExtensionField_OutputArguments = 15493,
    ExtensionFieldsType_RemoveExtensionField = 15494,
    ExtensionFieldsType_RemoveExtensionField_InputArguments = 15495,
    AddExtensionFieldMethodType = 15496,
    AddExtensionFieldMethodType_InputArguments = 15497,
    AddExtensionFieldMethodType_OutputArguments = 15498,
    RemoveExtensionFieldMethodType = 15499,
    RemoveExtensionFieldMethodType_InputArguments = 15500,
    OpcUa_BinarySchema_SimpleTypeDescription = 15501,
    NetworkAddressDataType = 15502,
    PublishedDataItemsType_ExtensionFields = 15503,
    PublishedDataItemsType_ExtensionFields_AddExtensionField = 15504,
    PublishedDataItemsType_ExtensionFields_AddExtensionField_InputArguments = 15505,
    PublishedDataItemsType_ExtensionFields_AddExtensionField_OutputArguments = 15506,
    PublishedDataItemsType_ExtensionFields_RemoveExtensionField = 15507,
    PublishedDataItemsType_ExtensionFields_RemoveExtensionField_InputArguments = 15508,
    OpcUa_BinarySchema_SimpleTypeDescription_DataTypeVersion = 15509,
    NetworkAddressUrlDataType = 15510,
    PublishedEventsType_ExtensionFields = 15511,
    PublishedEventsType_ExtensionFields_AddExtensionField = 15512,
    PublishedEventsType_ExtensionFields_AddExtensionField_InputArguments = 15513,
    PublishedEventsType_ExtensionFields_AddExtensionField_OutputArguments = 15514,
    PublishedEventsType_ExtensionFields_RemoveExtensionField = 15515,
    PublishedEventsType_ExtensionFields_RemoveExtensionField_InputArguments = 15516,
    PublishedEventsType_ModifyFieldSelection_OutputArguments = 15517,
    PublishedEventsTypeModifyFieldSelectionMethodType_OutputArguments = 15518,
    OpcUa_BinarySchema_SimpleTypeDescription_DictionaryFragment = 15519,
    ReaderGroupDataType = 15520,
    OpcUa_BinarySchema_UABinaryFileDataType = 15521,
    OpcUa_BinarySchema_UABinaryFileDataType_DataTypeVersion = 15522,
    OpcUa_BinarySchema_UABinaryFileDataType_DictionaryFragment = 15523,
    OpcUa_BinarySchema_BrokerConnectionTransportDataType = 15524,
    OpcUa_BinarySchema_BrokerConnectionTransportDataType_DataTypeVersion = 15525,
    OpcUa_BinarySchema_BrokerConnectionTransportDataType_DictionaryFragment = 15526,
    WellKnownRole_SecurityAdmin_EndpointsExclude = 15527,
    EndpointType = 15528,
    PubSubConfigurationDataType = 15530,
    DatagramWriterGroupTransportDataType = 15532,
    PublishSubscribeType_ConnectionName_Placeholder_Address_NetworkInterface = 15533,
    DataTypeSchemaHeader = 15534,
    PubSubStatusEventType = 15535,
    PubSubStatusEventType_EventId = 15536,
    PubSubStatusEventType_EventType = 15537,
    PubSubStatusEventType_SourceNode = 15538,
    PubSubStatusEventType_SourceName = 15539,
    PubSubStatusEventType_Time = 15540,
    PubSubStatusEventType_ReceiveTime = 15541,
    PubSubStatusEventType_LocalTime = 15542,
    PubSubStatusEventType_Message = 15543,
    PubSubStatusEventType_Severity = 15544,
    PubSubStatusEventType_ConnectionId = 15545,
    PubSubStatusEventType_GroupId = 15546,
    PubSubStatusEventType_State = 15547,
    PubSubTransportLimitsExceedEventType = 15548,
    PubSubTransportLimitsExceedEventType_EventId = 15549,
    PubSubTransportLimitsExceedEventType_EventType = 15550,
    PubSubTransportLimitsExceedEventType_SourceNode = 15551,
    PubSubTransportLimitsExceedEventType_SourceName = 15552,
    PubSubTransportLimitsExceedEventType_Time = 15553,
    PubSubTransportLimitsExceedEventType_ReceiveTime = 15554,
    PubSubTransportLimitsExceedEventType_LocalTime = 15555,
    PubSubTransportLimitsExceedEventType_Message = 15556,
    PubSubTransportLimitsExceedEventType_Severity = 15557,
    PubSubTransportLimitsExceedEventType_ConnectionId = 15558,
    PubSubTransportLimitsExceedEventType_GroupId = 15559,
    PubSubTransportLimitsExceedEventType_State = 15560,
    PubSubTransportLimitsExceedEventType_Actual = 15561,
    PubSubTransportLimitsExceedEventType_Maximum = 15562,
    PubSubCommunicationFailureEventType = 15563,
    PubSubCommunicationFailureEventType_EventId = 15564,
    PubSubCommunicationFailureEventType_EventType = 15565,
    PubSubCommunicationFailureEventType_SourceNode = 15566,
    PubSubCommunicationFailureEventType_SourceName = 15567,
    PubSubCommunicationFailureEventType_Time = 15568,
    PubSubCommunicationFailureEventType_ReceiveTime = 15569,
    PubSubCommunicationFailureEventType_LocalTime = 15570,
    PubSubCommunicationFailureEventType_Message = 15571,
    PubSubCommunicationFailureEventType_Severity = 15572,
    PubSubCommunicationFailureEventType_ConnectionId = 15573,
    PubSubCommunicationFailureEventType_GroupId = 15574,
    PubSubCommunicationFailureEventType_State = 15575,
    PubSubCommunicationFailureEventType_Error = 15576,
    DataSetFieldFlags_OptionSetValues = 15577,
    PublishedDataSetDataType = 15578,
    PublishedDataSetSourceDataType = 15580,
    PublishedDataItemsDataType = 15581,
    PublishedEventsDataType = 15582,
    DataSetFieldContentMask = 15583,
    DataSetFieldContentMask_OptionSetValues = 15584,
    DataSetWriterDataType = 15597,
    DataSetWriterTransportDataType = 15598,
    OpcUa_BinarySchema_StructureDescription = 15599,
    OpcUa_BinarySchema_StructureDescription_DataTypeVersion = 15600,
    OpcUa_BinarySchema_StructureDescription_DictionaryFragment = 15601,
    OpcUa_BinarySchema_EnumDescription = 15602,
    OpcUa_BinarySchema_EnumDescription_DataTypeVersion = 15603,
    OpcUa_BinarySchema_EnumDescription_DictionaryFragment = 15604,
    DataSetWriterMessageDataType = 15605,
    Server_ServerCapabilities_RoleSet = 15606,
    RoleSetType = 15607,
    RoleSetType_RoleName_Placeholder = 15608,
    PubSubGroupDataType = 15609,
    WriterGroupTransportDataType = 15611,
    RoleSetType_RoleName_Placeholder_AddIdentity = 15612,
    RoleSetType_RoleName_Placeholder_AddIdentity_InputArguments = 15613,
    RoleSetType_RoleName_Placeholder_RemoveIdentity = 15614,
    RoleSetType_RoleName_Placeholder_RemoveIdentity_InputArguments = 15615,
    WriterGroupMessageDataType = 15616,
    PubSubConnectionDataType = 15617,
    ConnectionTransportDataType = 15618,
    RoleType = 15620,
    ReaderGroupTransportDataType = 15621,
    ReaderGroupMessageDataType = 15622,
    DataSetReaderDataType = 15623,
    RoleType_AddIdentity = 15624,
    RoleType_AddIdentity_InputArguments = 15625,
    RoleType_RemoveIdentity = 15626,
    RoleType_RemoveIdentity_InputArguments = 15627,
    DataSetReaderTransportDataType = 15628,
    DataSetReaderMessageDataType = 15629,
    SubscribedDataSetDataType = 15630,
    TargetVariablesDataType = 15631,
    IdentityCriteriaType = 15632,
    IdentityCriteriaType_EnumValues = 15633,
    IdentityMappingRuleType = 15634,
    SubscribedDataSetMirrorDataType = 15635,
    AddIdentityMethodType = 15636,
    AddIdentityMethodType_InputArguments = 15637,
    RemoveIdentityMethodType = 15638,
    RemoveIdentityMethodType_InputArguments = 15639,
    DataSetOrderingType_EnumStrings = 15641,
    UadpNetworkMessageContentMask = 15642,
    UadpNetworkMessageContentMask_OptionSetValues = 15643,
    WellKnownRole_Anonymous = 15644,
    UadpWriterGroupMessageDataType = 15645,
    UadpDataSetMessageContentMask = 15646,
    UadpDataSetMessageContentMask_OptionSetValues = 15647,
    WellKnownRole_Anonymous_AddIdentity = 15648,
    WellKnownRole_Anonymous_AddIdentity_InputArguments = 15649,
    WellKnownRole_Anonymous_RemoveIdentity = 15650,
    WellKnownRole_Anonymous_RemoveIdentity_InputArguments = 15651,
    UadpDataSetWriterMessageDataType = 15652,
    UadpDataSetReaderMessageDataType = 15653,
    JsonNetworkMessageContentMask = 15654,
    JsonNetworkMessageContentMask_OptionSetValues = 15655,
    WellKnownRole_AuthenticatedUser = 15656,
    JsonWriterGroupMessageDataType = 15657,
    JsonDataSetMessageContentMask = 15658,
    JsonDataSetMessageContentMask_OptionSetValues = 15659,
    WellKnownRole_AuthenticatedUser_AddIdentity = 15660,
    WellKnownRole_AuthenticatedUser_AddIdentity_InputArguments = 15661,
    WellKnownRole_AuthenticatedUser_RemoveIdentity = 15662,
    WellKnownRole_AuthenticatedUser_RemoveIdentity_InputArguments = 15663,
    JsonDataSetWriterMessageDataType = 15664,
    JsonDataSetReaderMessageDataType = 15665,
    BrokerWriterGroupTransportDataType = 15667,
    WellKnownRole_Observer = 15668,
    BrokerDataSetWriterTransportDataType = 15669,
    BrokerDataSetReaderTransportDataType = 15670,
    EndpointType_Encoding_DefaultBinary = 15671,
    WellKnownRole_Observer_AddIdentity = 15672,
    WellKnownRole_Observer_AddIdentity_InputArguments = 15673,
    WellKnownRole_Observer_RemoveIdentity = 15674,
    WellKnownRole_Observer_RemoveIdentity_InputArguments = 15675,
    DataTypeSchemaHeader_Encoding_DefaultBinary = 15676,
    PublishedDataSetDataType_Encoding_DefaultBinary = 15677,
    PublishedDataSetSourceDataType_Encoding_DefaultBinary = 15678,
    PublishedDataItemsDataType_Encoding_DefaultBinary = 15679,
    WellKnownRole_Operator = 15680,
    PublishedEventsDataType_Encoding_DefaultBinary = 15681,
    DataSetWriterDataType_Encoding_DefaultBinary = 15682,
    DataSetWriterTransportDataType_Encoding_DefaultBinary = 15683,
    WellKnownRole_Operator_AddIdentity = 15684,
    WellKnownRole_Operator_AddIdentity_InputArguments = 15685,
    WellKnownRole_Operator_RemoveIdentity = 15686,
    WellKnownRole_Operator_RemoveIdentity_InputArguments = 15687,
    DataSetWriterMessageDataType_Encoding_DefaultBinary = 15688,
    PubSubGroupDataType_Encoding_DefaultBinary = 15689,
    WriterGroupTransportDataType_Encoding_DefaultBinary = 15691,
    WellKnownRole_Supervisor = 15692,
    WriterGroupMessageDataType_Encoding_DefaultBinary = 15693,
    PubSubConnectionDataType_Encoding_DefaultBinary = 15694,
    ConnectionTransportDataType_Encoding_DefaultBinary = 15695,
    WellKnownRole_Supervisor_AddIdentity = 15696,
    WellKnownRole_Supervisor_AddIdentity_InputArguments = 15697,
    WellKnownRole_Supervisor_RemoveIdentity = 15698,
    WellKnownRole_Supervisor_RemoveIdentity_InputArguments = 15699,
    SimpleTypeDescription_Encoding_DefaultJson = 15700,
    ReaderGroupTransportDataType_Encoding_DefaultBinary = 15701,
    ReaderGroupMessageDataType_Encoding_DefaultBinary = 15702,
    DataSetReaderDataType_Encoding_DefaultBinary = 15703,
    WellKnownRole_SecurityAdmin = 15704,
    DataSetReaderTransportDataType_Encoding_DefaultBinary = 15705,
    DataSetReaderMessageDataType_Encoding_DefaultBinary = 15706,
    SubscribedDataSetDataType_Encoding_DefaultBinary = 15707,
    WellKnownRole_SecurityAdmin_AddIdentity = 15708,
    WellKnownRole_SecurityAdmin_AddIdentity_InputArguments = 15709,
    WellKnownRole_SecurityAdmin_RemoveIdentity = 15710,
    WellKnownRole_SecurityAdmin_RemoveIdentity_InputArguments = 15711,
    TargetVariablesDataType_Encoding_DefaultBinary = 15712,
    SubscribedDataSetMirrorDataType_Encoding_DefaultBinary = 15713,
    UABinaryFileDataType_Encoding_DefaultJson = 15714,
    UadpWriterGroupMessageDataType_Encoding_DefaultBinary = 15715,
    WellKnownRole_ConfigureAdmin = 15716,
    UadpDataSetWriterMessageDataType_Encoding_DefaultBinary = 15717,
    UadpDataSetReaderMessageDataType_Encoding_DefaultBinary = 15718,
    JsonWriterGroupMessageDataType_Encoding_DefaultBinary = 15719,
    WellKnownRole_ConfigureAdmin_AddIdentity = 15720,
    WellKnownRole_ConfigureAdmin_AddIdentity_InputArguments = 15721,
    WellKnownRole_ConfigureAdmin_RemoveIdentity = 15722,
    WellKnownRole_ConfigureAdmin_RemoveIdentity_InputArguments = 15723,
    JsonDataSetWriterMessageDataType_Encoding_DefaultBinary = 15724,
    JsonDataSetReaderMessageDataType_Encoding_DefaultBinary = 15725,
    BrokerConnectionTransportDataType_Encoding_DefaultJson = 15726,
    BrokerWriterGroupTransportDataType_Encoding_DefaultBinary = 15727,
    BrokerDataSetWriterTransportDataType_Encoding_DefaultBinary = 15729,
    BrokerDataSetReaderTransportDataType_Encoding_DefaultBinary = 15733,
    OpcUa_BinarySchema_EndpointType = 15734,
    OpcUa_BinarySchema_EndpointType_DataTypeVersion = 15735,
    IdentityMappingRuleType_Encoding_DefaultBinary = 15736,
    OpcUa_BinarySchema_EndpointType_DictionaryFragment = 15737,
    OpcUa_BinarySchema_IdentityMappingRuleType = 15738,
    OpcUa_BinarySchema_IdentityMappingRuleType_DataTypeVersion = 15739,
    OpcUa_BinarySchema_IdentityMappingRuleType_DictionaryFragment = 15740,
    OpcUa_BinarySchema_DataTypeSchemaHeader = 15741,
    OpcUa_BinarySchema_DataTypeSchemaHeader_DataTypeVersion = 15742,
    OpcUa_BinarySchema_DataTypeSchemaHeader_DictionaryFragment = 15743,
    TemporaryFileTransferType = 15744,
    TemporaryFileTransferType_ClientProcessingTimeout = 15745,
    TemporaryFileTransferType_GenerateFileForRead = 15746,
    TemporaryFileTransferType_GenerateFileForRead_InputArguments = 15747,
    TemporaryFileTransferType_GenerateFileForRead_OutputArguments = 15748,
    TemporaryFileTransferType_GenerateFileForWrite = 15749,
    TemporaryFileTransferType_GenerateFileForWrite_OutputArguments = 15750,
    TemporaryFileTransferType_CloseAndCommit = 15751,
    TemporaryFileTransferType_CloseAndCommit_InputArguments = 15752,
    TemporaryFileTransferType_CloseAndCommit_OutputArguments = 15753,
    TemporaryFileTransferType_TransferState_Placeholder = 15754,
    TemporaryFileTransferType_TransferState_Placeholder_CurrentState = 15755,
    TemporaryFileTransferType_TransferState_Placeholder_CurrentState_Id = 15756,
    TemporaryFileTransferType_TransferState_Placeholder_CurrentState_Name = 15757,
    TemporaryFileTransferType_TransferState_Placeholder_CurrentState_Number = 15758,
    TemporaryFileTransferType_TransferState_Placeholder_CurrentState_EffectiveDisplayName = 15759,
    TemporaryFileTransferType_TransferState_Placeholder_LastTransition = 15760,
    TemporaryFileTransferType_TransferState_Placeholder_LastTransition_Id = 15761,
    TemporaryFileTransferType_TransferState_Placeholder_LastTransition_Name = 15762,
    TemporaryFileTransferType_TransferState_Placeholder_LastTransition_Number = 15763,
    TemporaryFileTransferType_TransferState_Placeholder_LastTransition_TransitionTime = 15764,
    TemporaryFileTransferType_TransferState_Placeholder_LastTransition_EffectiveTransitionTime = 15765,
    OpcUa_BinarySchema_PublishedDataSetDataType = 15766,
    OpcUa_BinarySchema_PublishedDataSetDataType_DataTypeVersion = 15767,
    OpcUa_BinarySchema_PublishedDataSetDataType_DictionaryFragment = 15768,
    OpcUa_BinarySchema_PublishedDataSetSourceDataType = 15769,
    OpcUa_BinarySchema_PublishedDataSetSourceDataType_DataTypeVersion = 15770,
    OpcUa_BinarySchema_PublishedDataSetSourceDataType_DictionaryFragment = 15771,
    OpcUa_BinarySchema_PublishedDataItemsDataType = 15772,
    OpcUa_BinarySchema_PublishedDataItemsDataType_DataTypeVersion = 15773,
    OpcUa_BinarySchema_PublishedDataItemsDataType_DictionaryFragment = 15774,
    OpcUa_BinarySchema_PublishedEventsDataType = 15775,
    OpcUa_BinarySchema_PublishedEventsDataType_DataTypeVersion = 15776,
    OpcUa_BinarySchema_PublishedEventsDataType_DictionaryFragment = 15777,
    OpcUa_BinarySchema_DataSetWriterDataType = 15778,
    OpcUa_BinarySchema_DataSetWriterDataType_DataTypeVersion = 15779,
    OpcUa_BinarySchema_DataSetWriterDataType_DictionaryFragment = 15780,
    OpcUa_BinarySchema_DataSetWriterTransportDataType = 15781,
    OpcUa_BinarySchema_DataSetWriterTransportDataType_DataTypeVersion = 15782,
    OpcUa_BinarySchema_DataSetWriterTransportDataType_DictionaryFragment = 15783,
    OpcUa_BinarySchema_DataSetWriterMessageDataType = 15784,
    OpcUa_BinarySchema_DataSetWriterMessageDataType_DataTypeVersion = 15785,
    OpcUa_BinarySchema_DataSetWriterMessageDataType_DictionaryFragment = 15786,
    OpcUa_BinarySchema_PubSubGroupDataType = 15787,
    OpcUa_BinarySchema_PubSubGroupDataType_DataTypeVersion = 15788,
    OpcUa_BinarySchema_PubSubGroupDataType_DictionaryFragment = 15789,
    PublishSubscribe_ConnectionName_Placeholder = 15790,
    PublishSubscribe_ConnectionName_Placeholder_PublisherId = 15791,
    PublishSubscribe_ConnectionName_Placeholder_TransportProfileUri = 15792,
    OpcUa_BinarySchema_WriterGroupTransportDataType = 15793,
    TemporaryFileTransferType_TransferState_Placeholder_Reset = 15794,
    GenerateFileForReadMethodType = 15795,
    GenerateFileForReadMethodType_InputArguments = 15796,
    GenerateFileForReadMethodType_OutputArguments = 15797,
    GenerateFileForWriteMethodType = 15798,
    GenerateFileForWriteMethodType_OutputArguments = 15799,
    CloseAndCommitMethodType = 15800,
    CloseAndCommitMethodType_InputArguments = 15801,
    CloseAndCommitMethodType_OutputArguments = 15802,
    FileTransferStateMachineType = 15803,
    FileTransferStateMachineType_CurrentState = 15804,
    FileTransferStateMachineType_CurrentState_Id = 15805,
    FileTransferStateMachineType_CurrentState_Name = 15806,
    FileTransferStateMachineType_CurrentState_Number = 15807,
    FileTransferStateMachineType_CurrentState_EffectiveDisplayName = 15808,
    FileTransferStateMachineType_LastTransition = 15809,
    FileTransferStateMachineType_LastTransition_Id = 15810,
    FileTransferStateMachineType_LastTransition_Name = 15811,
    FileTransferStateMachineType_LastTransition_Number = 15812,
    FileTransferStateMachineType_LastTransition_TransitionTime = 15813,
    FileTransferStateMachineType_LastTransition_EffectiveTransitionTime = 15814,
    FileTransferStateMachineType_Idle = 15815,
    FileTransferStateMachineType_Idle_StateNumber = 15816,
    FileTransferStateMachineType_ReadPrepare = 15817,
    FileTransferStateMachineType_ReadPrepare_StateNumber = 15818,
    FileTransferStateMachineType_ReadTransfer = 15819,
    FileTransferStateMachineType_ReadTransfer_StateNumber = 15820,
    FileTransferStateMachineType_ApplyWrite = 15821,
    FileTransferStateMachineType_ApplyWrite_StateNumber = 15822,
    FileTransferStateMachineType_Error = 15823,
    FileTransferStateMachineType_Error_StateNumber = 15824,
    FileTransferStateMachineType_IdleToReadPrepare = 15825,
    FileTransferStateMachineType_IdleToReadPrepare_TransitionNumber = 15826,
    FileTransferStateMachineType_ReadPrepareToReadTransfer = 15827,
    FileTransferStateMachineType_ReadPrepareToReadTransfer_TransitionNumber = 15828,
    FileTransferStateMachineType_ReadTransferToIdle = 15829,
    FileTransferStateMachineType_ReadTransferToIdle_TransitionNumber = 15830,
    FileTransferStateMachineType_IdleToApplyWrite = 15831,
    FileTransferStateMachineType_IdleToApplyWrite_TransitionNumber = 15832,
    FileTransferStateMachineType_ApplyWriteToIdle = 15833,
    FileTransferStateMachineType_ApplyWriteToIdle_TransitionNumber = 15834,
    FileTransferStateMachineType_ReadPrepareToError = 15835,
    FileTransferStateMachineType_ReadPrepareToError_TransitionNumber = 15836,
    FileTransferStateMachineType_ReadTransferToError = 15837,
    FileTransferStateMachineType_ReadTransferToError_TransitionNumber = 15838,
    FileTransferStateMachineType_ApplyWriteToError = 15839,
    FileTransferStateMachineType_ApplyWriteToError_TransitionNumber = 15840,
    FileTransferStateMachineType_ErrorToIdle = 15841,
    FileTransferStateMachineType_ErrorToIdle_TransitionNumber = 15842,
    FileTransferStateMachineType_Reset = 15843,
    PublishSubscribeType_Status = 15844,
    PublishSubscribeType_Status_State = 15845,
    PublishSubscribeType_Status_Enable = 15846,
    PublishSubscribeType_Status_Disable = 15847,
    PublishSubscribe_ConnectionName_Placeholder_TransportProfileUri_Selections = 15848,
    PublishSubscribe_ConnectionName_Placeholder_TransportProfileUri_SelectionDescriptions = 15849,
    PublishSubscribe_ConnectionName_Placeholder_TransportProfileUri_RestrictToList = 15850,
    PublishSubscribe_ConnectionName_Placeholder_Address = 15851,
    OpcUa_BinarySchema_WriterGroupTransportDataType_DataTypeVersion = 15852,
    OpcUa_BinarySchema_WriterGroupTransportDataType_DictionaryFragment = 15853,
    OpcUa_BinarySchema_WriterGroupMessageDataType = 15854,
    OpcUa_BinarySchema_WriterGroupMessageDataType_DataTypeVersion = 15855,
    OpcUa_BinarySchema_WriterGroupMessageDataType_DictionaryFragment = 15856,
    OpcUa_BinarySchema_PubSubConnectionDataType = 15857,
    OpcUa_BinarySchema_PubSubConnectionDataType_DataTypeVersion = 15858,
    OpcUa_BinarySchema_PubSubConnectionDataType_DictionaryFragment = 15859,
    OpcUa_BinarySchema_ConnectionTransportDataType = 15860,
    OpcUa_BinarySchema_ConnectionTransportDataType_DataTypeVersion = 15861,
    OpcUa_BinarySchema_ConnectionTransportDataType_DictionaryFragment = 15862,
    PublishSubscribe_ConnectionName_Placeholder_Address_NetworkInterface = 15863,
    PublishSubscribe_ConnectionName_Placeholder_TransportSettings = 15864,
    PublishSubscribe_ConnectionName_Placeholder_Status = 15865,
    OpcUa_BinarySchema_ReaderGroupTransportDataType = 15866,
    OpcUa_BinarySchema_ReaderGroupTransportDataType_DataTypeVersion = 15867,
    OpcUa_BinarySchema_ReaderGroupTransportDataType_DictionaryFragment = 15868,
    OpcUa_BinarySchema_ReaderGroupMessageDataType = 15869,
    OpcUa_BinarySchema_ReaderGroupMessageDataType_DataTypeVersion = 15870,
    OpcUa_BinarySchema_ReaderGroupMessageDataType_DictionaryFragment = 15871,
    OpcUa_BinarySchema_DataSetReaderDataType = 15872,
    OpcUa_BinarySchema_DataSetReaderDataType_DataTypeVersion = 15873,
    OverrideValueHandling = 15874,
    OverrideValueHandling_EnumStrings = 15875,
    OpcUa_BinarySchema_DataSetReaderDataType_DictionaryFragment = 15876,
    OpcUa_BinarySchema_DataSetReaderTransportDataType = 15877,
    OpcUa_BinarySchema_DataSetReaderTransportDataType_DataTypeVersion = 15878,
    OpcUa_BinarySchema_DataSetReaderTransportDataType_DictionaryFragment = 15879,
    OpcUa_BinarySchema_DataSetReaderMessageDataType = 15880,
    OpcUa_BinarySchema_DataSetReaderMessageDataType_DataTypeVersion = 15881,
    OpcUa_BinarySchema_DataSetReaderMessageDataType_DictionaryFragment = 15882,
    OpcUa_BinarySchema_SubscribedDataSetDataType = 15883,
    OpcUa_BinarySchema_SubscribedDataSetDataType_DataTypeVersion = 15884,
    OpcUa_BinarySchema_SubscribedDataSetDataType_DictionaryFragment = 15885,
    OpcUa_BinarySchema_TargetVariablesDataType = 15886,
    OpcUa_BinarySchema_TargetVariablesDataType_DataTypeVersion = 15887,
    OpcUa_BinarySchema_TargetVariablesDataType_DictionaryFragment = 15888,
    OpcUa_BinarySchema_SubscribedDataSetMirrorDataType = 15889,
    OpcUa_BinarySchema_SubscribedDataSetMirrorDataType_DataTypeVersion = 15890,
    OpcUa_BinarySchema_SubscribedDataSetMirrorDataType_DictionaryFragment = 15891,
    PublishSubscribe_ConnectionName_Placeholder_Status_State = 15892,
    PublishSubscribe_ConnectionName_Placeholder_Status_Enable = 15893,
    PublishSubscribe_ConnectionName_Placeholder_Status_Disable = 15894,
    OpcUa_BinarySchema_UadpWriterGroupMessageDataType = 15895,
    OpcUa_BinarySchema_UadpWriterGroupMessageDataType_DataTypeVersion = 15896,
    OpcUa_BinarySchema_UadpWriterGroupMessageDataType_DictionaryFragment = 15897,
    OpcUa_BinarySchema_UadpDataSetWriterMessageDataType = 15898,
    OpcUa_BinarySchema_UadpDataSetWriterMessageDataType_DataTypeVersion = 15899,
    OpcUa_BinarySchema_UadpDataSetWriterMessageDataType_DictionaryFragment = 15900,
    SessionlessInvokeRequestType = 15901,
    SessionlessInvokeRequestType_Encoding_DefaultBinary = 15903,
    DataSetFieldFlags = 15904,
    PublishSubscribeType_ConnectionName_Placeholder_TransportSettings = 15905,
    PubSubKeyServiceType = 15906,
    PubSubKeyServiceType_GetSecurityKeys = 15907,
    PubSubKeyServiceType_GetSecurityKeys_InputArguments = 15908,
    PubSubKeyServiceType_GetSecurityKeys_OutputArguments = 15909,
    PubSubKeyServiceType_GetSecurityGroup = 15910,
    PubSubKeyServiceType_GetSecurityGroup_InputArguments = 15911,
    PubSubKeyServiceType_GetSecurityGroup_OutputArguments = 15912,
    PubSubKeyServiceType_SecurityGroups = 15913,
    PubSubKeyServiceType_SecurityGroups_AddSecurityGroup = 15914,
    PubSubKeyServiceType_SecurityGroups_AddSecurityGroup_InputArguments = 15915,
    PubSubKeyServiceType_SecurityGroups_AddSecurityGroup_OutputArguments = 15916,
    PubSubKeyServiceType_SecurityGroups_RemoveSecurityGroup = 15917,
    PubSubKeyServiceType_SecurityGroups_RemoveSecurityGroup_InputArguments = 15918,
    OpcUa_BinarySchema_UadpDataSetReaderMessageDataType = 15919,
    OpcUa_BinarySchema_UadpDataSetReaderMessageDataType_DataTypeVersion = 15920,
    OpcUa_BinarySchema_UadpDataSetReaderMessageDataType_DictionaryFragment = 15921,
    OpcUa_BinarySchema_JsonWriterGroupMessageDataType = 15922,
    OpcUa_BinarySchema_JsonWriterGroupMessageDataType_DataTypeVersion = 15923,
    OpcUa_BinarySchema_JsonWriterGroupMessageDataType_DictionaryFragment = 15924,
    OpcUa_BinarySchema_JsonDataSetWriterMessageDataType = 15925,
    PubSubGroupType_SecurityMode = 15926,
    PubSubGroupType_SecurityGroupId = 15927,
    PubSubGroupType_SecurityKeyServices = 15928,
    OpcUa_BinarySchema_JsonDataSetWriterMessageDataType_DataTypeVersion = 15929,
    OpcUa_BinarySchema_JsonDataSetWriterMessageDataType_DictionaryFragment = 15930,
    OpcUa_BinarySchema_JsonDataSetReaderMessageDataType = 15931,
    DataSetReaderType_SecurityMode = 15932,
    DataSetReaderType_SecurityGroupId = 15933,
    DataSetReaderType_SecurityKeyServices = 15934,
    OpcUa_BinarySchema_JsonDataSetReaderMessageDataType_DataTypeVersion = 15935,
    OpcUa_BinarySchema_JsonDataSetReaderMessageDataType_DictionaryFragment = 15936,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics = 15937,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_DiagnosticsLevel = 15938,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalInformation = 15939,
    OpcUa_BinarySchema_BrokerWriterGroupTransportDataType = 15940,
    OpcUa_BinarySchema_BrokerWriterGroupTransportDataType_DataTypeVersion = 15941,
    OpcUa_BinarySchema_BrokerWriterGroupTransportDataType_DictionaryFragment = 15942,
    OpcUa_BinarySchema_BrokerDataSetWriterTransportDataType = 15943,
    OpcUa_BinarySchema_BrokerDataSetWriterTransportDataType_DataTypeVersion = 15944,
    OpcUa_BinarySchema_BrokerDataSetWriterTransportDataType_DictionaryFragment = 15945,
    OpcUa_BinarySchema_BrokerDataSetReaderTransportDataType = 15946,
    OpcUa_BinarySchema_BrokerDataSetReaderTransportDataType_DataTypeVersion = 15947,
    OpcUa_BinarySchema_BrokerDataSetReaderTransportDataType_DictionaryFragment = 15948,
    OPCUANamespaceMetadata = 15957,
    OPCUANamespaceMetadata_NamespaceUri = 15958,
    OPCUANamespaceMetadata_NamespaceVersion = 15959,
    OPCUANamespaceMetadata_NamespacePublicationDate = 15960,
    OPCUANamespaceMetadata_IsNamespaceSubset = 15961,
    OPCUANamespaceMetadata_StaticNodeIdTypes = 15962,
    OPCUANamespaceMetadata_StaticNumericNodeIdRange = 15963,
    OPCUANamespaceMetadata_StaticStringNodeIdPattern = 15964,
    OPCUANamespaceMetadata_NamespaceFile = 15965,
    OPCUANamespaceMetadata_NamespaceFile_Size = 15966,
    OPCUANamespaceMetadata_NamespaceFile_Writable = 15967,
    OPCUANamespaceMetadata_NamespaceFile_UserWritable = 15968,
    OPCUANamespaceMetadata_NamespaceFile_OpenCount = 15969,
    OPCUANamespaceMetadata_NamespaceFile_MimeType = 15970,
    OPCUANamespaceMetadata_NamespaceFile_Open = 15971,
    OPCUANamespaceMetadata_NamespaceFile_Open_InputArguments = 15972,
    OPCUANamespaceMetadata_NamespaceFile_Open_OutputArguments = 15973,
    OPCUANamespaceMetadata_NamespaceFile_Close = 15974,
    OPCUANamespaceMetadata_NamespaceFile_Close_InputArguments = 15975,
    OPCUANamespaceMetadata_NamespaceFile_Read = 15976,
    OPCUANamespaceMetadata_NamespaceFile_Read_InputArguments = 15977,
    OPCUANamespaceMetadata_NamespaceFile_Read_OutputArguments = 15978,
    OPCUANamespaceMetadata_NamespaceFile_Write = 15979,
    OPCUANamespaceMetadata_NamespaceFile_Write_InputArguments = 15980,
    OPCUANamespaceMetadata_NamespaceFile_GetPosition = 15981,
    OPCUANamespaceMetadata_NamespaceFile_GetPosition_InputArguments = 15982,
    OPCUANamespaceMetadata_NamespaceFile_GetPosition_OutputArguments = 15983,
    OPCUANamespaceMetadata_NamespaceFile_SetPosition = 15984,
    OPCUANamespaceMetadata_NamespaceFile_SetPosition_InputArguments = 15985,
    OPCUANamespaceMetadata_NamespaceFile_ExportNamespace = 15986,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalInformation_Active = 15989,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalInformation_Classification = 15994,
    RoleSetType_AddRole = 15997,
    RoleSetType_AddRole_InputArguments = 15998,
    RoleSetType_AddRole_OutputArguments = 15999,
    RoleSetType_RemoveRole = 16000,
    RoleSetType_RemoveRole_InputArguments = 16001,
    AddRoleMethodType = 16002,
    AddRoleMethodType_InputArguments = 16003,
    AddRoleMethodType_OutputArguments = 16004,
    RemoveRoleMethodType = 16005,
    RemoveRoleMethodType_InputArguments = 16006,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 16013,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 16020,
    WellKnownRole_Engineer = 16036,
    WellKnownRole_Engineer_AddIdentity = 16041,
    WellKnownRole_Engineer_AddIdentity_InputArguments = 16042,
    WellKnownRole_Engineer_RemoveIdentity = 16043,
    WellKnownRole_Engineer_RemoveIdentity_InputArguments = 16044,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalError = 16059,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalError_Active = 16060,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalError_Classification = 16061,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 16074,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 16075,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Reset = 16076,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_SubError = 16101,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters = 16102,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateError = 16103,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateError_Active = 16122,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateError_Classification = 16123,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 16124,
    OpcUa_BinarySchema_RolePermissionType = 16131,
    OpcUa_BinarySchema_RolePermissionType_DataTypeVersion = 16132,
    OpcUa_BinarySchema_RolePermissionType_DictionaryFragment = 16133,
    OPCUANamespaceMetadata_DefaultRolePermissions = 16134,
    OPCUANamespaceMetadata_DefaultUserRolePermissions = 16135,
    OPCUANamespaceMetadata_DefaultAccessRestrictions = 16136,
    NamespaceMetadataType_DefaultRolePermissions = 16137,
    NamespaceMetadataType_DefaultUserRolePermissions = 16138,
    NamespaceMetadataType_DefaultAccessRestrictions = 16139,
    NamespacesType_NamespaceIdentifier_Placeholder_DefaultRolePermissions = 16140,
    NamespacesType_NamespaceIdentifier_Placeholder_DefaultUserRolePermissions = 16141,
    NamespacesType_NamespaceIdentifier_Placeholder_DefaultAccessRestrictions = 16142,
    EndpointType_Encoding_DefaultJson = 16150,
    DataTypeSchemaHeader_Encoding_DefaultJson = 16151,
    PublishedDataSetDataType_Encoding_DefaultJson = 16152,
    PublishedDataSetSourceDataType_Encoding_DefaultJson = 16153,
    PublishedDataItemsDataType_Encoding_DefaultJson = 16154,
    PublishedEventsDataType_Encoding_DefaultJson = 16155,
    DataSetWriterDataType_Encoding_DefaultJson = 16156,
    DataSetWriterTransportDataType_Encoding_DefaultJson = 16157,
    DataSetWriterMessageDataType_Encoding_DefaultJson = 16158,
    PubSubGroupDataType_Encoding_DefaultJson = 16159,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 16160,
    WriterGroupTransportDataType_Encoding_DefaultJson = 16161,
    RoleSetType_RoleName_Placeholder_Identities = 16162,
    RoleSetType_RoleName_Placeholder_Applications = 16163,
    RoleSetType_RoleName_Placeholder_Endpoints = 16164,
    RoleSetType_RoleName_Placeholder_AddApplication = 16165,
    RoleSetType_RoleName_Placeholder_AddApplication_InputArguments = 16166,
    RoleSetType_RoleName_Placeholder_RemoveApplication = 16167,
    RoleSetType_RoleName_Placeholder_RemoveApplication_InputArguments = 16168,
    RoleSetType_RoleName_Placeholder_AddEndpoint = 16169,
    RoleSetType_RoleName_Placeholder_AddEndpoint_InputArguments = 16170,
    RoleSetType_RoleName_Placeholder_RemoveEndpoint = 16171,
    RoleSetType_RoleName_Placeholder_RemoveEndpoint_InputArguments = 16172,
    RoleType_Identities = 16173,
    RoleType_Applications = 16174,
    RoleType_Endpoints = 16175,
    RoleType_AddApplication = 16176,
    RoleType_AddApplication_InputArguments = 16177,
    RoleType_RemoveApplication = 16178,
    RoleType_RemoveApplication_InputArguments = 16179,
    RoleType_AddEndpoint = 16180,
    RoleType_AddEndpoint_InputArguments = 16181,
    RoleType_RemoveEndpoint = 16182,
    RoleType_RemoveEndpoint_InputArguments = 16183,
    AddApplicationMethodType = 16184,
    AddApplicationMethodType_InputArguments = 16185,
    RemoveApplicationMethodType = 16186,
    RemoveApplicationMethodType_InputArguments = 16187,
    AddEndpointMethodType = 16188,
    AddEndpointMethodType_InputArguments = 16189,
    RemoveEndpointMethodType = 16190,
    RemoveEndpointMethodType_InputArguments = 16191,
    WellKnownRole_Anonymous_Identities = 16192,
    WellKnownRole_Anonymous_Applications = 16193,
    WellKnownRole_Anonymous_Endpoints = 16194,
    WellKnownRole_Anonymous_AddApplication = 16195,
    WellKnownRole_Anonymous_AddApplication_InputArguments = 16196,
    WellKnownRole_Anonymous_RemoveApplication = 16197,
    WellKnownRole_Anonymous_RemoveApplication_InputArguments = 16198,
    WellKnownRole_Anonymous_AddEndpoint = 16199,
    WellKnownRole_Anonymous_AddEndpoint_InputArguments = 16200,
    WellKnownRole_Anonymous_RemoveEndpoint = 16201,
    WellKnownRole_Anonymous_RemoveEndpoint_InputArguments = 16202,
    WellKnownRole_AuthenticatedUser_Identities = 16203,
    WellKnownRole_AuthenticatedUser_Applications = 16204,
    WellKnownRole_AuthenticatedUser_Endpoints = 16205,
    WellKnownRole_AuthenticatedUser_AddApplication = 16206,
    WellKnownRole_AuthenticatedUser_AddApplication_InputArguments = 16207,
    WellKnownRole_AuthenticatedUser_RemoveApplication = 16208,
    WellKnownRole_AuthenticatedUser_RemoveApplication_InputArguments = 16209,
    WellKnownRole_AuthenticatedUser_AddEndpoint = 16210,
    WellKnownRole_AuthenticatedUser_AddEndpoint_InputArguments = 16211,
    WellKnownRole_AuthenticatedUser_RemoveEndpoint = 16212,
    WellKnownRole_AuthenticatedUser_RemoveEndpoint_InputArguments = 16213,
    WellKnownRole_Observer_Identities = 16214,
    WellKnownRole_Observer_Applications = 16215,
    WellKnownRole_Observer_Endpoints = 16216,
    WellKnownRole_Observer_AddApplication = 16217,
    WellKnownRole_Observer_AddApplication_InputArguments = 16218,
    WellKnownRole_Observer_RemoveApplication = 16219,
    WellKnownRole_Observer_RemoveApplication_InputArguments = 16220,
    WellKnownRole_Observer_AddEndpoint = 16221,
    WellKnownRole_Observer_AddEndpoint_InputArguments = 16222,
    WellKnownRole_Observer_RemoveEndpoint = 16223,
    WellKnownRole_Observer_RemoveEndpoint_InputArguments = 16224,
    WellKnownRole_Operator_Identities = 16225,
    WellKnownRole_Operator_Applications = 16226,
    WellKnownRole_Operator_Endpoints = 16227,
    WellKnownRole_Operator_AddApplication = 16228,
    WellKnownRole_Operator_AddApplication_InputArguments = 16229,
    WellKnownRole_Operator_RemoveApplication = 16230,
    WellKnownRole_Operator_RemoveApplication_InputArguments = 16231,
    WellKnownRole_Operator_AddEndpoint = 16232,
    WellKnownRole_Operator_AddEndpoint_InputArguments = 16233,
    WellKnownRole_Operator_RemoveEndpoint = 16234,
    WellKnownRole_Operator_RemoveEndpoint_InputArguments = 16235,
    WellKnownRole_Engineer_Identities = 16236,
    WellKnownRole_Engineer_Applications = 16237,
    WellKnownRole_Engineer_Endpoints = 16238,
    WellKnownRole_Engineer_AddApplication = 16239,
    WellKnownRole_Engineer_AddApplication_InputArguments = 16240,
    WellKnownRole_Engineer_RemoveApplication = 16241,
    WellKnownRole_Engineer_RemoveApplication_InputArguments = 16242,
    WellKnownRole_Engineer_AddEndpoint = 16243,
    WellKnownRole_Engineer_AddEndpoint_InputArguments = 16244,
    WellKnownRole_Engineer_RemoveEndpoint = 16245,
    WellKnownRole_Engineer_RemoveEndpoint_InputArguments = 16246,
    WellKnownRole_Supervisor_Identities = 16247,
    WellKnownRole_Supervisor_Applications = 16248,
    WellKnownRole_Supervisor_Endpoints = 16249,
    WellKnownRole_Supervisor_AddApplication = 16250,
    WellKnownRole_Supervisor_AddApplication_InputArguments = 16251,
    WellKnownRole_Supervisor_RemoveApplication = 16252,
    WellKnownRole_Supervisor_RemoveApplication_InputArguments = 16253,
    WellKnownRole_Supervisor_AddEndpoint = 16254,
    WellKnownRole_Supervisor_AddEndpoint_InputArguments = 16255,
    WellKnownRole_Supervisor_RemoveEndpoint = 16256,
    WellKnownRole_Supervisor_RemoveEndpoint_InputArguments = 16257,
    WellKnownRole_SecurityAdmin_Identities = 16258,
    WellKnownRole_SecurityAdmin_Applications = 16259,
    WellKnownRole_SecurityAdmin_Endpoints = 16260,
    WellKnownRole_SecurityAdmin_AddApplication = 16261,
    WellKnownRole_SecurityAdmin_AddApplication_InputArguments = 16262,
    WellKnownRole_SecurityAdmin_RemoveApplication = 16263,
    WellKnownRole_SecurityAdmin_RemoveApplication_InputArguments = 16264,
    WellKnownRole_SecurityAdmin_AddEndpoint = 16265,
    WellKnownRole_SecurityAdmin_AddEndpoint_InputArguments = 16266,
    WellKnownRole_SecurityAdmin_RemoveEndpoint = 16267,
    WellKnownRole_SecurityAdmin_RemoveEndpoint_InputArguments = 16268,
    WellKnownRole_ConfigureAdmin_Identities = 16269,
    WellKnownRole_ConfigureAdmin_Applications = 16270,
    WellKnownRole_ConfigureAdmin_Endpoints = 16271,
    WellKnownRole_ConfigureAdmin_AddApplication = 16272,
    WellKnownRole_ConfigureAdmin_AddApplication_InputArguments = 16273,
    WellKnownRole_ConfigureAdmin_RemoveApplication = 16274,
    WellKnownRole_ConfigureAdmin_RemoveApplication_InputArguments = 16275,
    WellKnownRole_ConfigureAdmin_AddEndpoint = 16276,
    WellKnownRole_ConfigureAdmin_AddEndpoint_InputArguments = 16277,
    WellKnownRole_ConfigureAdmin_RemoveEndpoint = 16278,
    WellKnownRole_ConfigureAdmin_RemoveEndpoint_InputArguments = 16279,
    WriterGroupMessageDataType_Encoding_DefaultJson = 16280,
    PubSubConnectionDataType_Encoding_DefaultJson = 16281,
    ConnectionTransportDataType_Encoding_DefaultJson = 16282,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 16283,
    ReaderGroupTransportDataType_Encoding_DefaultJson = 16284,
    ReaderGroupMessageDataType_Encoding_DefaultJson = 16285,
    DataSetReaderDataType_Encoding_DefaultJson = 16286,
    DataSetReaderTransportDataType_Encoding_DefaultJson = 16287,
    DataSetReaderMessageDataType_Encoding_DefaultJson = 16288,
    ServerType_ServerCapabilities_RoleSet = 16289,
    ServerType_ServerCapabilities_RoleSet_AddRole = 16290,
    ServerType_ServerCapabilities_RoleSet_AddRole_InputArguments = 16291,
    ServerType_ServerCapabilities_RoleSet_AddRole_OutputArguments = 16292,
    ServerType_ServerCapabilities_RoleSet_RemoveRole = 16293,
    ServerType_ServerCapabilities_RoleSet_RemoveRole_InputArguments = 16294,
    ServerCapabilitiesType_RoleSet = 16295,
    ServerCapabilitiesType_RoleSet_AddRole = 16296,
    ServerCapabilitiesType_RoleSet_AddRole_InputArguments = 16297,
    ServerCapabilitiesType_RoleSet_AddRole_OutputArguments = 16298,
    ServerCapabilitiesType_RoleSet_RemoveRole = 16299,
    ServerCapabilitiesType_RoleSet_RemoveRole_InputArguments = 16300,
    Server_ServerCapabilities_RoleSet_AddRole = 16301,
    Server_ServerCapabilities_RoleSet_AddRole_InputArguments = 16302,
    Server_ServerCapabilities_RoleSet_AddRole_OutputArguments = 16303,
    Server_ServerCapabilities_RoleSet_RemoveRole = 16304,
    Server_ServerCapabilities_RoleSet_RemoveRole_InputArguments = 16305,
    AudioDataType = 16307,
    SubscribedDataSetDataType_Encoding_DefaultJson = 16308,
    SelectionListType = 16309,
    TargetVariablesDataType_Encoding_DefaultJson = 16310,
    SubscribedDataSetMirrorDataType_Encoding_DefaultJson = 16311,
    SelectionListType_RestrictToList = 16312,
    AdditionalParametersType = 16313,
    FileSystem = 16314,
    FileSystem_FileDirectoryName_Placeholder = 16315,
    FileSystem_FileDirectoryName_Placeholder_CreateDirectory = 16316,
    FileSystem_FileDirectoryName_Placeholder_CreateDirectory_InputArguments = 16317,
    FileSystem_FileDirectoryName_Placeholder_CreateDirectory_OutputArguments = 16318,
    FileSystem_FileDirectoryName_Placeholder_CreateFile = 16319,
    FileSystem_FileDirectoryName_Placeholder_CreateFile_InputArguments = 16320,
    FileSystem_FileDirectoryName_Placeholder_CreateFile_OutputArguments = 16321,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 16322,
    UadpWriterGroupMessageDataType_Encoding_DefaultJson = 16323,
    FileSystem_FileDirectoryName_Placeholder_MoveOrCopy = 16324,
    FileSystem_FileDirectoryName_Placeholder_MoveOrCopy_InputArguments = 16325,
    FileSystem_FileDirectoryName_Placeholder_MoveOrCopy_OutputArguments = 16326,
    FileSystem_FileName_Placeholder = 16327,
    FileSystem_FileName_Placeholder_Size = 16328,
    FileSystem_FileName_Placeholder_Writable = 16329,
    FileSystem_FileName_Placeholder_UserWritable = 16330,
    FileSystem_FileName_Placeholder_OpenCount = 16331,
    FileSystem_FileName_Placeholder_MimeType = 16332,
    FileSystem_FileName_Placeholder_Open = 16333,
    FileSystem_FileName_Placeholder_Open_InputArguments = 16334,
    FileSystem_FileName_Placeholder_Open_OutputArguments = 16335,
    FileSystem_FileName_Placeholder_Close = 16336,
    FileSystem_FileName_Placeholder_Close_InputArguments = 16337,
    FileSystem_FileName_Placeholder_Read = 16338,
    FileSystem_FileName_Placeholder_Read_InputArguments = 16339,
    FileSystem_FileName_Placeholder_Read_OutputArguments = 16340,
    FileSystem_FileName_Placeholder_Write = 16341,
    FileSystem_FileName_Placeholder_Write_InputArguments = 16342,
    FileSystem_FileName_Placeholder_GetPosition = 16343,
    FileSystem_FileName_Placeholder_GetPosition_InputArguments = 16344,
    FileSystem_FileName_Placeholder_GetPosition_OutputArguments = 16345,
    FileSystem_FileName_Placeholder_SetPosition = 16346,
    FileSystem_FileName_Placeholder_SetPosition_InputArguments = 16347,
    FileSystem_CreateDirectory = 16348,
    FileSystem_CreateDirectory_InputArguments = 16349,
    FileSystem_CreateDirectory_OutputArguments = 16350,
    FileSystem_CreateFile = 16351,
    FileSystem_CreateFile_InputArguments = 16352,
    FileSystem_CreateFile_OutputArguments = 16353,
    FileSystem_DeleteFileSystemObject = 16354,
    FileSystem_DeleteFileSystemObject_InputArguments = 16355,
    FileSystem_MoveOrCopy = 16356,
    FileSystem_MoveOrCopy_InputArguments = 16357,
    FileSystem_MoveOrCopy_OutputArguments = 16358,
    TemporaryFileTransferType_GenerateFileForWrite_InputArguments = 16359,
    GenerateFileForWriteMethodType_InputArguments = 16360,
    HasAlarmSuppressionGroup = 16361,
    AlarmGroupMember = 16362,
    ConditionType_ConditionSubClassId = 16363,
    ConditionType_ConditionSubClassName = 16364,
    DialogConditionType_ConditionSubClassId = 16365,
    DialogConditionType_ConditionSubClassName = 16366,
    AcknowledgeableConditionType_ConditionSubClassId = 16367,
    AcknowledgeableConditionType_ConditionSubClassName = 16368,
    AlarmConditionType_ConditionSubClassId = 16369,
    AlarmConditionType_ConditionSubClassName = 16370,
    AlarmConditionType_OutOfServiceState = 16371,
    AlarmConditionType_OutOfServiceState_Id = 16372,
    AlarmConditionType_OutOfServiceState_Name = 16373,
    AlarmConditionType_OutOfServiceState_Number = 16374,
    AlarmConditionType_OutOfServiceState_EffectiveDisplayName = 16375,
    AlarmConditionType_OutOfServiceState_TransitionTime = 16376,
    AlarmConditionType_OutOfServiceState_EffectiveTransitionTime = 16377,
    AlarmConditionType_OutOfServiceState_TrueState = 16378,
    AlarmConditionType_OutOfServiceState_FalseState = 16379,
    AlarmConditionType_SilenceState = 16380,
    AlarmConditionType_SilenceState_Id = 16381,
    AlarmConditionType_SilenceState_Name = 16382,
    AlarmConditionType_SilenceState_Number = 16383,
    AlarmConditionType_SilenceState_EffectiveDisplayName = 16384,
    AlarmConditionType_SilenceState_TransitionTime = 16385,
    AlarmConditionType_SilenceState_EffectiveTransitionTime = 16386,
    AlarmConditionType_SilenceState_TrueState = 16387,
    AlarmConditionType_SilenceState_FalseState = 16388,
    AlarmConditionType_AudibleEnabled = 16389,
    AlarmConditionType_AudibleSound = 16390,
    UadpDataSetWriterMessageDataType_Encoding_DefaultJson = 16391,
    UadpDataSetReaderMessageDataType_Encoding_DefaultJson = 16392,
    JsonWriterGroupMessageDataType_Encoding_DefaultJson = 16393,
    JsonDataSetWriterMessageDataType_Encoding_DefaultJson = 16394,
    AlarmConditionType_OnDelay = 16395,
    AlarmConditionType_OffDelay = 16396,
    AlarmConditionType_FirstInGroupFlag = 16397,
    AlarmConditionType_FirstInGroup = 16398,
    AlarmConditionType_AlarmGroup_Placeholder = 16399,
    AlarmConditionType_ReAlarmTime = 16400,
    AlarmConditionType_ReAlarmRepeatCount = 16401,
    AlarmConditionType_Silence = 16402,
    AlarmConditionType_Suppress = 16403,
    JsonDataSetReaderMessageDataType_Encoding_DefaultJson = 16404,
    AlarmGroupType = 16405,
    AlarmGroupType_AlarmConditionInstance_Placeholder = 16406,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EventId = 16407,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EventType = 16408,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SourceNode = 16409,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SourceName = 16410,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Time = 16411,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ReceiveTime = 16412,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LocalTime = 16413,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Message = 16414,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Severity = 16415,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConditionClassId = 16416,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConditionClassName = 16417,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConditionSubClassId = 16418,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConditionSubClassName = 16419,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConditionName = 16420,
    AlarmGroupType_AlarmConditionInstance_Placeholder_BranchId = 16421,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Retain = 16422,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState = 16423,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState_Id = 16424,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState_Name = 16425,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState_Number = 16426,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState_EffectiveDisplayName = 16427,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState_TransitionTime = 16428,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState_EffectiveTransitionTime = 16429,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState_TrueState = 16430,
    AlarmGroupType_AlarmConditionInstance_Placeholder_EnabledState_FalseState = 16431,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Quality = 16432,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Quality_SourceTimestamp = 16433,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LastSeverity = 16434,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LastSeverity_SourceTimestamp = 16435,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Comment = 16436,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Comment_SourceTimestamp = 16437,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ClientUserId = 16438,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Disable = 16439,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Enable = 16440,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AddComment = 16441,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AddComment_InputArguments = 16442,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState = 16443,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState_Id = 16444,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState_Name = 16445,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState_Number = 16446,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState_EffectiveDisplayName = 16447,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState_TransitionTime = 16448,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState_EffectiveTransitionTime = 16449,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState_TrueState = 16450,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AckedState_FalseState = 16451,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState = 16452,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState_Id = 16453,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState_Name = 16454,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState_Number = 16455,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState_EffectiveDisplayName = 16456,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState_TransitionTime = 16457,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState_EffectiveTransitionTime = 16458,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState_TrueState = 16459,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ConfirmedState_FalseState = 16460,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Acknowledge = 16461,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Acknowledge_InputArguments = 16462,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Confirm = 16463,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Confirm_InputArguments = 16464,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState = 16465,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState_Id = 16466,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState_Name = 16467,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState_Number = 16468,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState_EffectiveDisplayName = 16469,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState_TransitionTime = 16470,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState_EffectiveTransitionTime = 16471,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState_TrueState = 16472,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ActiveState_FalseState = 16473,
    AlarmGroupType_AlarmConditionInstance_Placeholder_InputNode = 16474,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState = 16475,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState_Id = 16476,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState_Name = 16477,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState_Number = 16478,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState_EffectiveDisplayName = 16479,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState_TransitionTime = 16480,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState_EffectiveTransitionTime = 16481,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState_TrueState = 16482,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedState_FalseState = 16483,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState = 16484,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState_Id = 16485,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState_Name = 16486,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState_Number = 16487,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState_EffectiveDisplayName = 16488,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState_TransitionTime = 16489,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState_EffectiveTransitionTime = 16490,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState_TrueState = 16491,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OutOfServiceState_FalseState = 16492,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState = 16493,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState_Id = 16494,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState_Name = 16495,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState_Number = 16496,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState_EffectiveDisplayName = 16497,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState_TransitionTime = 16498,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState_EffectiveTransitionTime = 16499,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState_TrueState = 16500,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SilenceState_FalseState = 16501,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState = 16502,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_CurrentState = 16503,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_CurrentState_Id = 16504,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_CurrentState_Name = 16505,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_CurrentState_Number = 16506,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_CurrentState_EffectiveDisplayName = 16507,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_LastTransition = 16508,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_LastTransition_Id = 16509,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_LastTransition_Name = 16510,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_LastTransition_Number = 16511,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_LastTransition_TransitionTime = 16512,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_LastTransition_EffectiveTransitionTime = 16513,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_UnshelveTime = 16514,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_Unshelve = 16515,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_OneShotShelve = 16516,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_TimedShelve = 16517,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_TimedShelve_InputArguments = 16518,
    AlarmGroupType_AlarmConditionInstance_Placeholder_SuppressedOrShelved = 16519,
    AlarmGroupType_AlarmConditionInstance_Placeholder_MaxTimeShelved = 16520,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AudibleEnabled = 16521,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AudibleSound = 16522,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 16523,
    BrokerWriterGroupTransportDataType_Encoding_DefaultJson = 16524,
    BrokerDataSetWriterTransportDataType_Encoding_DefaultJson = 16525,
    BrokerDataSetReaderTransportDataType_Encoding_DefaultJson = 16526,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OnDelay = 16527,
    AlarmGroupType_AlarmConditionInstance_Placeholder_OffDelay = 16528,
    AlarmGroupType_AlarmConditionInstance_Placeholder_FirstInGroupFlag = 16529,
    AlarmGroupType_AlarmConditionInstance_Placeholder_FirstInGroup = 16530,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ReAlarmTime = 16531,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ReAlarmRepeatCount = 16532,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Silence = 16533,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Suppress = 16534,
    PublishSubscribeType_ConnectionName_Placeholder_AddWriterGroup = 16535,
    LimitAlarmType_ConditionSubClassId = 16536,
    LimitAlarmType_ConditionSubClassName = 16537,
    LimitAlarmType_OutOfServiceState = 16538,
    LimitAlarmType_OutOfServiceState_Id = 16539,
    LimitAlarmType_OutOfServiceState_Name = 16540,
    LimitAlarmType_OutOfServiceState_Number = 16541,
    LimitAlarmType_OutOfServiceState_EffectiveDisplayName = 16542,
    LimitAlarmType_OutOfServiceState_TransitionTime = 16543,
    LimitAlarmType_OutOfServiceState_EffectiveTransitionTime = 16544,
    LimitAlarmType_OutOfServiceState_TrueState = 16545,
    LimitAlarmType_OutOfServiceState_FalseState = 16546,
    LimitAlarmType_SilenceState = 16547,
    LimitAlarmType_SilenceState_Id = 16548,
    LimitAlarmType_SilenceState_Name = 16549,
    LimitAlarmType_SilenceState_Number = 16550,
    LimitAlarmType_SilenceState_EffectiveDisplayName = 16551,
    LimitAlarmType_SilenceState_TransitionTime = 16552,
    LimitAlarmType_SilenceState_EffectiveTransitionTime = 16553,
    LimitAlarmType_SilenceState_TrueState = 16554,
    LimitAlarmType_SilenceState_FalseState = 16555,
    LimitAlarmType_AudibleEnabled = 16556,
    LimitAlarmType_AudibleSound = 16557,
    PublishSubscribeType_ConnectionName_Placeholder_AddWriterGroup_InputArguments = 16558,
    PublishSubscribeType_ConnectionName_Placeholder_AddWriterGroup_OutputArguments = 16559,
    PublishSubscribeType_ConnectionName_Placeholder_AddReaderGroup = 16560,
    PublishSubscribeType_ConnectionName_Placeholder_AddReaderGroup_InputArguments = 16561,
    LimitAlarmType_OnDelay = 16562,
    LimitAlarmType_OffDelay = 16563,
    LimitAlarmType_FirstInGroupFlag = 16564,
    LimitAlarmType_FirstInGroup = 16565,
    LimitAlarmType_AlarmGroup_Placeholder = 16566,
    LimitAlarmType_ReAlarmTime = 16567,
    LimitAlarmType_ReAlarmRepeatCount = 16568,
    LimitAlarmType_Silence = 16569,
    LimitAlarmType_Suppress = 16570,
    PublishSubscribeType_ConnectionName_Placeholder_AddReaderGroup_OutputArguments = 16571,
    LimitAlarmType_BaseHighHighLimit = 16572,
    LimitAlarmType_BaseHighLimit = 16573,
    LimitAlarmType_BaseLowLimit = 16574,
    LimitAlarmType_BaseLowLowLimit = 16575,
    ExclusiveLimitAlarmType_ConditionSubClassId = 16576,
    ExclusiveLimitAlarmType_ConditionSubClassName = 16577,
    ExclusiveLimitAlarmType_OutOfServiceState = 16578,
    ExclusiveLimitAlarmType_OutOfServiceState_Id = 16579,
    ExclusiveLimitAlarmType_OutOfServiceState_Name = 16580,
    ExclusiveLimitAlarmType_OutOfServiceState_Number = 16581,
    ExclusiveLimitAlarmType_OutOfServiceState_EffectiveDisplayName = 16582,
    ExclusiveLimitAlarmType_OutOfServiceState_TransitionTime = 16583,
    ExclusiveLimitAlarmType_OutOfServiceState_EffectiveTransitionTime = 16584,
    ExclusiveLimitAlarmType_OutOfServiceState_TrueState = 16585,
    ExclusiveLimitAlarmType_OutOfServiceState_FalseState = 16586,
    ExclusiveLimitAlarmType_SilenceState = 16587,
    ExclusiveLimitAlarmType_SilenceState_Id = 16588,
    ExclusiveLimitAlarmType_SilenceState_Name = 16589,
    ExclusiveLimitAlarmType_SilenceState_Number = 16590,
    ExclusiveLimitAlarmType_SilenceState_EffectiveDisplayName = 16591,
    ExclusiveLimitAlarmType_SilenceState_TransitionTime = 16592,
    ExclusiveLimitAlarmType_SilenceState_EffectiveTransitionTime = 16593,
    ExclusiveLimitAlarmType_SilenceState_TrueState = 16594,
    ExclusiveLimitAlarmType_SilenceState_FalseState = 16595,
    ExclusiveLimitAlarmType_AudibleEnabled = 16596,
    ExclusiveLimitAlarmType_AudibleSound = 16597,
    PublishSubscribeType_AddConnection = 16598,
    PublishSubscribeType_AddConnection_InputArguments = 16599,
    PublishSubscribeType_AddConnection_OutputArguments = 16600,
    PublishSubscribeType_PublishedDataSets_AddPublishedDataItemsTemplate = 16601,
    ExclusiveLimitAlarmType_OnDelay = 16602,
    ExclusiveLimitAlarmType_OffDelay = 16603,
    ExclusiveLimitAlarmType_FirstInGroupFlag = 16604,
    ExclusiveLimitAlarmType_FirstInGroup = 16605,
    ExclusiveLimitAlarmType_AlarmGroup_Placeholder = 16606,
    ExclusiveLimitAlarmType_ReAlarmTime = 16607,
    ExclusiveLimitAlarmType_ReAlarmRepeatCount = 16608,
    ExclusiveLimitAlarmType_Silence = 16609,
    ExclusiveLimitAlarmType_Suppress = 16610,
    PublishSubscribeType_PublishedDataSets_AddPublishedDataItemsTemplate_InputArguments = 16611,
    ExclusiveLimitAlarmType_BaseHighHighLimit = 16612,
    ExclusiveLimitAlarmType_BaseHighLimit = 16613,
    ExclusiveLimitAlarmType_BaseLowLimit = 16614,
    ExclusiveLimitAlarmType_BaseLowLowLimit = 16615,
    NonExclusiveLimitAlarmType_ConditionSubClassId = 16616,
    NonExclusiveLimitAlarmType_ConditionSubClassName = 16617,
    NonExclusiveLimitAlarmType_OutOfServiceState = 16618,
    NonExclusiveLimitAlarmType_OutOfServiceState_Id = 16619,
    NonExclusiveLimitAlarmType_OutOfServiceState_Name = 16620,
    NonExclusiveLimitAlarmType_OutOfServiceState_Number = 16621,
    NonExclusiveLimitAlarmType_OutOfServiceState_EffectiveDisplayName = 16622,
    NonExclusiveLimitAlarmType_OutOfServiceState_TransitionTime = 16623,
    NonExclusiveLimitAlarmType_OutOfServiceState_EffectiveTransitionTime = 16624,
    NonExclusiveLimitAlarmType_OutOfServiceState_TrueState = 16625,
    NonExclusiveLimitAlarmType_OutOfServiceState_FalseState = 16626,
    NonExclusiveLimitAlarmType_SilenceState = 16627,
    NonExclusiveLimitAlarmType_SilenceState_Id = 16628,
    NonExclusiveLimitAlarmType_SilenceState_Name = 16629,
    NonExclusiveLimitAlarmType_SilenceState_Number = 16630,
    NonExclusiveLimitAlarmType_SilenceState_EffectiveDisplayName = 16631,
    NonExclusiveLimitAlarmType_SilenceState_TransitionTime = 16632,
    NonExclusiveLimitAlarmType_SilenceState_EffectiveTransitionTime = 16633,
    NonExclusiveLimitAlarmType_SilenceState_TrueState = 16634,
    NonExclusiveLimitAlarmType_SilenceState_FalseState = 16635,
    NonExclusiveLimitAlarmType_AudibleEnabled = 16636,
    NonExclusiveLimitAlarmType_AudibleSound = 16637,
    PublishSubscribeType_PublishedDataSets_AddPublishedDataItemsTemplate_OutputArguments = 16638,
    PublishSubscribeType_PublishedDataSets_AddPublishedEventsTemplate = 16639,
    PublishSubscribeType_PublishedDataSets_AddPublishedEventsTemplate_InputArguments = 16640,
    PublishSubscribeType_PublishedDataSets_AddPublishedEventsTemplate_OutputArguments = 16641,
    NonExclusiveLimitAlarmType_OnDelay = 16642,
    NonExclusiveLimitAlarmType_OffDelay = 16643,
    NonExclusiveLimitAlarmType_FirstInGroupFlag = 16644,
    NonExclusiveLimitAlarmType_FirstInGroup = 16645,
    NonExclusiveLimitAlarmType_AlarmGroup_Placeholder = 16646,
    NonExclusiveLimitAlarmType_ReAlarmTime = 16647,
    NonExclusiveLimitAlarmType_ReAlarmRepeatCount = 16648,
    NonExclusiveLimitAlarmType_Silence = 16649,
    NonExclusiveLimitAlarmType_Suppress = 16650,
    PublishSubscribeType_PublishedDataSets_AddDataSetFolder = 16651,
    NonExclusiveLimitAlarmType_BaseHighHighLimit = 16652,
    NonExclusiveLimitAlarmType_BaseHighLimit = 16653,
    NonExclusiveLimitAlarmType_BaseLowLimit = 16654,
    NonExclusiveLimitAlarmType_BaseLowLowLimit = 16655,
    NonExclusiveLevelAlarmType_ConditionSubClassId = 16656,
    NonExclusiveLevelAlarmType_ConditionSubClassName = 16657,
    NonExclusiveLevelAlarmType_OutOfServiceState = 16658,
    NonExclusiveLevelAlarmType_OutOfServiceState_Id = 16659,
    NonExclusiveLevelAlarmType_OutOfServiceState_Name = 16660,
    NonExclusiveLevelAlarmType_OutOfServiceState_Number = 16661,
    NonExclusiveLevelAlarmType_OutOfServiceState_EffectiveDisplayName = 16662,
    NonExclusiveLevelAlarmType_OutOfServiceState_TransitionTime = 16663,
    NonExclusiveLevelAlarmType_OutOfServiceState_EffectiveTransitionTime = 16664,
    NonExclusiveLevelAlarmType_OutOfServiceState_TrueState = 16665,
    NonExclusiveLevelAlarmType_OutOfServiceState_FalseState = 16666,
    NonExclusiveLevelAlarmType_SilenceState = 16667,
    NonExclusiveLevelAlarmType_SilenceState_Id = 16668,
    NonExclusiveLevelAlarmType_SilenceState_Name = 16669,
    NonExclusiveLevelAlarmType_SilenceState_Number = 16670,
    NonExclusiveLevelAlarmType_SilenceState_EffectiveDisplayName = 16671,
    NonExclusiveLevelAlarmType_SilenceState_TransitionTime = 16672,
    NonExclusiveLevelAlarmType_SilenceState_EffectiveTransitionTime = 16673,
    NonExclusiveLevelAlarmType_SilenceState_TrueState = 16674,
    NonExclusiveLevelAlarmType_SilenceState_FalseState = 16675,
    NonExclusiveLevelAlarmType_AudibleEnabled = 16676,
    NonExclusiveLevelAlarmType_AudibleSound = 16677,
    PublishSubscribeType_PublishedDataSets_AddDataSetFolder_InputArguments = 16678,
    PublishSubscribeType_PublishedDataSets_AddDataSetFolder_OutputArguments = 16679,
    PublishSubscribeType_PublishedDataSets_RemoveDataSetFolder = 16680,
    PublishSubscribeType_PublishedDataSets_RemoveDataSetFolder_InputArguments = 16681,
    NonExclusiveLevelAlarmType_OnDelay = 16682,
    NonExclusiveLevelAlarmType_OffDelay = 16683,
    NonExclusiveLevelAlarmType_FirstInGroupFlag = 16684,
    NonExclusiveLevelAlarmType_FirstInGroup = 16685,
    NonExclusiveLevelAlarmType_AlarmGroup_Placeholder = 16686,
    NonExclusiveLevelAlarmType_ReAlarmTime = 16687,
    NonExclusiveLevelAlarmType_ReAlarmRepeatCount = 16688,
    NonExclusiveLevelAlarmType_Silence = 16689,
    NonExclusiveLevelAlarmType_Suppress = 16690,
    AddConnectionMethodType = 16691,
    NonExclusiveLevelAlarmType_BaseHighHighLimit = 16692,
    NonExclusiveLevelAlarmType_BaseHighLimit = 16693,
    NonExclusiveLevelAlarmType_BaseLowLimit = 16694,
    NonExclusiveLevelAlarmType_BaseLowLowLimit = 16695,
    ExclusiveLevelAlarmType_ConditionSubClassId = 16696,
    ExclusiveLevelAlarmType_ConditionSubClassName = 16697,
    ExclusiveLevelAlarmType_OutOfServiceState = 16698,
    ExclusiveLevelAlarmType_OutOfServiceState_Id = 16699,
    ExclusiveLevelAlarmType_OutOfServiceState_Name = 16700,
    ExclusiveLevelAlarmType_OutOfServiceState_Number = 16701,
    ExclusiveLevelAlarmType_OutOfServiceState_EffectiveDisplayName = 16702,
    ExclusiveLevelAlarmType_OutOfServiceState_TransitionTime = 16703,
    ExclusiveLevelAlarmType_OutOfServiceState_EffectiveTransitionTime = 16704,
    ExclusiveLevelAlarmType_OutOfServiceState_TrueState = 16705,
    ExclusiveLevelAlarmType_OutOfServiceState_FalseState = 16706,
    ExclusiveLevelAlarmType_SilenceState = 16707,
    ExclusiveLevelAlarmType_SilenceState_Id = 16708,
    ExclusiveLevelAlarmType_SilenceState_Name = 16709,
    ExclusiveLevelAlarmType_SilenceState_Number = 16710,
    ExclusiveLevelAlarmType_SilenceState_EffectiveDisplayName = 16711,
    ExclusiveLevelAlarmType_SilenceState_TransitionTime = 16712,
    ExclusiveLevelAlarmType_SilenceState_EffectiveTransitionTime = 16713,
    ExclusiveLevelAlarmType_SilenceState_TrueState = 16714,
    ExclusiveLevelAlarmType_SilenceState_FalseState = 16715,
    ExclusiveLevelAlarmType_AudibleEnabled = 16716,
    ExclusiveLevelAlarmType_AudibleSound = 16717,
    AddConnectionMethodType_InputArguments = 16718,
    AddConnectionMethodType_OutputArguments = 16719,
    PublishedDataSetType_DataSetWriterName_Placeholder_DataSetWriterId = 16720,
    PublishedDataSetType_DataSetWriterName_Placeholder_DataSetFieldContentMask = 16721,
    ExclusiveLevelAlarmType_OnDelay = 16722,
    ExclusiveLevelAlarmType_OffDelay = 16723,
    ExclusiveLevelAlarmType_FirstInGroupFlag = 16724,
    ExclusiveLevelAlarmType_FirstInGroup = 16725,
    ExclusiveLevelAlarmType_AlarmGroup_Placeholder = 16726,
    ExclusiveLevelAlarmType_ReAlarmTime = 16727,
    ExclusiveLevelAlarmType_ReAlarmRepeatCount = 16728,
    ExclusiveLevelAlarmType_Silence = 16729,
    ExclusiveLevelAlarmType_Suppress = 16730,
    PublishedDataSetType_DataSetWriterName_Placeholder_KeyFrameCount = 16731,
    ExclusiveLevelAlarmType_BaseHighHighLimit = 16732,
    ExclusiveLevelAlarmType_BaseHighLimit = 16733,
    ExclusiveLevelAlarmType_BaseLowLimit = 16734,
    ExclusiveLevelAlarmType_BaseLowLowLimit = 16735,
    NonExclusiveDeviationAlarmType_ConditionSubClassId = 16736,
    NonExclusiveDeviationAlarmType_ConditionSubClassName = 16737,
    NonExclusiveDeviationAlarmType_OutOfServiceState = 16738,
    NonExclusiveDeviationAlarmType_OutOfServiceState_Id = 16739,
    NonExclusiveDeviationAlarmType_OutOfServiceState_Name = 16740,
    NonExclusiveDeviationAlarmType_OutOfServiceState_Number = 16741,
    NonExclusiveDeviationAlarmType_OutOfServiceState_EffectiveDisplayName = 16742,
    NonExclusiveDeviationAlarmType_OutOfServiceState_TransitionTime = 16743,
    NonExclusiveDeviationAlarmType_OutOfServiceState_EffectiveTransitionTime = 16744,
    NonExclusiveDeviationAlarmType_OutOfServiceState_TrueState = 16745,
    NonExclusiveDeviationAlarmType_OutOfServiceState_FalseState = 16746,
    NonExclusiveDeviationAlarmType_SilenceState = 16747,
    NonExclusiveDeviationAlarmType_SilenceState_Id = 16748,
    NonExclusiveDeviationAlarmType_SilenceState_Name = 16749,
    NonExclusiveDeviationAlarmType_SilenceState_Number = 16750,
    NonExclusiveDeviationAlarmType_SilenceState_EffectiveDisplayName = 16751,
    NonExclusiveDeviationAlarmType_SilenceState_TransitionTime = 16752,
    NonExclusiveDeviationAlarmType_SilenceState_EffectiveTransitionTime = 16753,
    NonExclusiveDeviationAlarmType_SilenceState_TrueState = 16754,
    NonExclusiveDeviationAlarmType_SilenceState_FalseState = 16755,
    NonExclusiveDeviationAlarmType_AudibleEnabled = 16756,
    NonExclusiveDeviationAlarmType_AudibleSound = 16757,
    PublishedDataSetType_DataSetWriterName_Placeholder_MessageSettings = 16758,
    PublishedDataSetType_DataSetClassId = 16759,
    PublishedDataItemsType_DataSetWriterName_Placeholder_DataSetWriterId = 16760,
    PublishedDataItemsType_DataSetWriterName_Placeholder_DataSetFieldContentMask = 16761,
    NonExclusiveDeviationAlarmType_OnDelay = 16762,
    NonExclusiveDeviationAlarmType_OffDelay = 16763,
    NonExclusiveDeviationAlarmType_FirstInGroupFlag = 16764,
    NonExclusiveDeviationAlarmType_FirstInGroup = 16765,
    NonExclusiveDeviationAlarmType_AlarmGroup_Placeholder = 16766,
    NonExclusiveDeviationAlarmType_ReAlarmTime = 16767,
    NonExclusiveDeviationAlarmType_ReAlarmRepeatCount = 16768,
    NonExclusiveDeviationAlarmType_Silence = 16769,
    NonExclusiveDeviationAlarmType_Suppress = 16770,
    PublishedDataItemsType_DataSetWriterName_Placeholder_KeyFrameCount = 16771,
    NonExclusiveDeviationAlarmType_BaseHighHighLimit = 16772,
    NonExclusiveDeviationAlarmType_BaseHighLimit = 16773,
    NonExclusiveDeviationAlarmType_BaseLowLimit = 16774,
    NonExclusiveDeviationAlarmType_BaseLowLowLimit = 16775,
    NonExclusiveDeviationAlarmType_BaseSetpointNode = 16776,
    ExclusiveDeviationAlarmType_ConditionSubClassId = 16777,
    ExclusiveDeviationAlarmType_ConditionSubClassName = 16778,
    ExclusiveDeviationAlarmType_OutOfServiceState = 16779,
    ExclusiveDeviationAlarmType_OutOfServiceState_Id = 16780,
    ExclusiveDeviationAlarmType_OutOfServiceState_Name = 16781,
    ExclusiveDeviationAlarmType_OutOfServiceState_Number = 16782,
    ExclusiveDeviationAlarmType_OutOfServiceState_EffectiveDisplayName = 16783,
    ExclusiveDeviationAlarmType_OutOfServiceState_TransitionTime = 16784,
    ExclusiveDeviationAlarmType_OutOfServiceState_EffectiveTransitionTime = 16785,
    ExclusiveDeviationAlarmType_OutOfServiceState_TrueState = 16786,
    ExclusiveDeviationAlarmType_OutOfServiceState_FalseState = 16787,
    ExclusiveDeviationAlarmType_SilenceState = 16788,
    ExclusiveDeviationAlarmType_SilenceState_Id = 16789,
    ExclusiveDeviationAlarmType_SilenceState_Name = 16790,
    ExclusiveDeviationAlarmType_SilenceState_Number = 16791,
    ExclusiveDeviationAlarmType_SilenceState_EffectiveDisplayName = 16792,
    ExclusiveDeviationAlarmType_SilenceState_TransitionTime = 16793,
    ExclusiveDeviationAlarmType_SilenceState_EffectiveTransitionTime = 16794,
    ExclusiveDeviationAlarmType_SilenceState_TrueState = 16795,
    ExclusiveDeviationAlarmType_SilenceState_FalseState = 16796,
    ExclusiveDeviationAlarmType_AudibleEnabled = 16797,
    ExclusiveDeviationAlarmType_AudibleSound = 16798,
    PublishedDataItemsType_DataSetWriterName_Placeholder_MessageSettings = 16799,
    PublishedDataItemsType_DataSetClassId = 16800,
    PublishedEventsType_DataSetWriterName_Placeholder_DataSetWriterId = 16801,
    PublishedEventsType_DataSetWriterName_Placeholder_DataSetFieldContentMask = 16802,
    ExclusiveDeviationAlarmType_OnDelay = 16803,
    ExclusiveDeviationAlarmType_OffDelay = 16804,
    ExclusiveDeviationAlarmType_FirstInGroupFlag = 16805,
    ExclusiveDeviationAlarmType_FirstInGroup = 16806,
    ExclusiveDeviationAlarmType_AlarmGroup_Placeholder = 16807,
    ExclusiveDeviationAlarmType_ReAlarmTime = 16808,
    ExclusiveDeviationAlarmType_ReAlarmRepeatCount = 16809,
    ExclusiveDeviationAlarmType_Silence = 16810,
    ExclusiveDeviationAlarmType_Suppress = 16811,
    PublishedEventsType_DataSetWriterName_Placeholder_KeyFrameCount = 16812,
    ExclusiveDeviationAlarmType_BaseHighHighLimit = 16813,
    ExclusiveDeviationAlarmType_BaseHighLimit = 16814,
    ExclusiveDeviationAlarmType_BaseLowLimit = 16815,
    ExclusiveDeviationAlarmType_BaseLowLowLimit = 16816,
    ExclusiveDeviationAlarmType_BaseSetpointNode = 16817,
    NonExclusiveRateOfChangeAlarmType_ConditionSubClassId = 16818,
    NonExclusiveRateOfChangeAlarmType_ConditionSubClassName = 16819,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState = 16820,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState_Id = 16821,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState_Name = 16822,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState_Number = 16823,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState_EffectiveDisplayName = 16824,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState_TransitionTime = 16825,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState_EffectiveTransitionTime = 16826,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState_TrueState = 16827,
    NonExclusiveRateOfChangeAlarmType_OutOfServiceState_FalseState = 16828,
    NonExclusiveRateOfChangeAlarmType_SilenceState = 16829,
    NonExclusiveRateOfChangeAlarmType_SilenceState_Id = 16830,
    NonExclusiveRateOfChangeAlarmType_SilenceState_Name = 16831,
    NonExclusiveRateOfChangeAlarmType_SilenceState_Number = 16832,
    NonExclusiveRateOfChangeAlarmType_SilenceState_EffectiveDisplayName = 16833,
    NonExclusiveRateOfChangeAlarmType_SilenceState_TransitionTime = 16834,
    NonExclusiveRateOfChangeAlarmType_SilenceState_EffectiveTransitionTime = 16835,
    NonExclusiveRateOfChangeAlarmType_SilenceState_TrueState = 16836,
    NonExclusiveRateOfChangeAlarmType_SilenceState_FalseState = 16837,
    NonExclusiveRateOfChangeAlarmType_AudibleEnabled = 16838,
    NonExclusiveRateOfChangeAlarmType_AudibleSound = 16839,
    PublishedEventsType_DataSetWriterName_Placeholder_MessageSettings = 16840,
    PublishedEventsType_DataSetClassId = 16841,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedDataItemsTemplate = 16842,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedDataItemsTemplate_InputArguments = 16843,
    NonExclusiveRateOfChangeAlarmType_OnDelay = 16844,
    NonExclusiveRateOfChangeAlarmType_OffDelay = 16845,
    NonExclusiveRateOfChangeAlarmType_FirstInGroupFlag = 16846,
    NonExclusiveRateOfChangeAlarmType_FirstInGroup = 16847,
    NonExclusiveRateOfChangeAlarmType_AlarmGroup_Placeholder = 16848,
    NonExclusiveRateOfChangeAlarmType_ReAlarmTime = 16849,
    NonExclusiveRateOfChangeAlarmType_ReAlarmRepeatCount = 16850,
    NonExclusiveRateOfChangeAlarmType_Silence = 16851,
    NonExclusiveRateOfChangeAlarmType_Suppress = 16852,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedDataItemsTemplate_OutputArguments = 16853,
    NonExclusiveRateOfChangeAlarmType_BaseHighHighLimit = 16854,
    NonExclusiveRateOfChangeAlarmType_BaseHighLimit = 16855,
    NonExclusiveRateOfChangeAlarmType_BaseLowLimit = 16856,
    NonExclusiveRateOfChangeAlarmType_BaseLowLowLimit = 16857,
    NonExclusiveRateOfChangeAlarmType_EngineeringUnits = 16858,
    ExclusiveRateOfChangeAlarmType_ConditionSubClassId = 16859,
    ExclusiveRateOfChangeAlarmType_ConditionSubClassName = 16860,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState = 16861,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState_Id = 16862,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState_Name = 16863,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState_Number = 16864,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState_EffectiveDisplayName = 16865,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState_TransitionTime = 16866,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState_EffectiveTransitionTime = 16867,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState_TrueState = 16868,
    ExclusiveRateOfChangeAlarmType_OutOfServiceState_FalseState = 16869,
    ExclusiveRateOfChangeAlarmType_SilenceState = 16870,
    ExclusiveRateOfChangeAlarmType_SilenceState_Id = 16871,
    ExclusiveRateOfChangeAlarmType_SilenceState_Name = 16872,
    ExclusiveRateOfChangeAlarmType_SilenceState_Number = 16873,
    ExclusiveRateOfChangeAlarmType_SilenceState_EffectiveDisplayName = 16874,
    ExclusiveRateOfChangeAlarmType_SilenceState_TransitionTime = 16875,
    ExclusiveRateOfChangeAlarmType_SilenceState_EffectiveTransitionTime = 16876,
    ExclusiveRateOfChangeAlarmType_SilenceState_TrueState = 16877,
    ExclusiveRateOfChangeAlarmType_SilenceState_FalseState = 16878,
    ExclusiveRateOfChangeAlarmType_AudibleEnabled = 16879,
    ExclusiveRateOfChangeAlarmType_AudibleSound = 16880,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedEventsTemplate = 16881,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedEventsTemplate_InputArguments = 16882,
    DataSetFolderType_DataSetFolderName_Placeholder_AddPublishedEventsTemplate_OutputArguments = 16883,
    DataSetFolderType_DataSetFolderName_Placeholder_AddDataSetFolder = 16884,
    ExclusiveRateOfChangeAlarmType_OnDelay = 16885,
    ExclusiveRateOfChangeAlarmType_OffDelay = 16886,
    ExclusiveRateOfChangeAlarmType_FirstInGroupFlag = 16887,
    ExclusiveRateOfChangeAlarmType_FirstInGroup = 16888,
    ExclusiveRateOfChangeAlarmType_AlarmGroup_Placeholder = 16889,
    ExclusiveRateOfChangeAlarmType_ReAlarmTime = 16890,
    ExclusiveRateOfChangeAlarmType_ReAlarmRepeatCount = 16891,
    ExclusiveRateOfChangeAlarmType_Silence = 16892,
    ExclusiveRateOfChangeAlarmType_Suppress = 16893,
    DataSetFolderType_DataSetFolderName_Placeholder_AddDataSetFolder_InputArguments = 16894,
    ExclusiveRateOfChangeAlarmType_BaseHighHighLimit = 16895,
    ExclusiveRateOfChangeAlarmType_BaseHighLimit = 16896,
    ExclusiveRateOfChangeAlarmType_BaseLowLimit = 16897,
    ExclusiveRateOfChangeAlarmType_BaseLowLowLimit = 16898,
    ExclusiveRateOfChangeAlarmType_EngineeringUnits = 16899,
    DiscreteAlarmType_ConditionSubClassId = 16900,
    DiscreteAlarmType_ConditionSubClassName = 16901,
    DiscreteAlarmType_OutOfServiceState = 16902,
    DiscreteAlarmType_OutOfServiceState_Id = 16903,
    DiscreteAlarmType_OutOfServiceState_Name = 16904,
    DiscreteAlarmType_OutOfServiceState_Number = 16905,
    DiscreteAlarmType_OutOfServiceState_EffectiveDisplayName = 16906,
    DiscreteAlarmType_OutOfServiceState_TransitionTime = 16907,
    DiscreteAlarmType_OutOfServiceState_EffectiveTransitionTime = 16908,
    DiscreteAlarmType_OutOfServiceState_TrueState = 16909,
    DiscreteAlarmType_OutOfServiceState_FalseState = 16910,
    DiscreteAlarmType_SilenceState = 16911,
    DiscreteAlarmType_SilenceState_Id = 16912,
    DiscreteAlarmType_SilenceState_Name = 16913,
    DiscreteAlarmType_SilenceState_Number = 16914,
    DiscreteAlarmType_SilenceState_EffectiveDisplayName = 16915,
    DiscreteAlarmType_SilenceState_TransitionTime = 16916,
    DiscreteAlarmType_SilenceState_EffectiveTransitionTime = 16917,
    DiscreteAlarmType_SilenceState_TrueState = 16918,
    DiscreteAlarmType_SilenceState_FalseState = 16919,
    DiscreteAlarmType_AudibleEnabled = 16920,
    DiscreteAlarmType_AudibleSound = 16921,
    DataSetFolderType_DataSetFolderName_Placeholder_AddDataSetFolder_OutputArguments = 16922,
    DataSetFolderType_DataSetFolderName_Placeholder_RemoveDataSetFolder = 16923,
    DataSetFolderType_DataSetFolderName_Placeholder_RemoveDataSetFolder_InputArguments = 16924,
    DataSetFolderType_PublishedDataSetName_Placeholder_DataSetClassId = 16925,
    DiscreteAlarmType_OnDelay = 16926,
    DiscreteAlarmType_OffDelay = 16927,
    DiscreteAlarmType_FirstInGroupFlag = 16928,
    DiscreteAlarmType_FirstInGroup = 16929,
    DiscreteAlarmType_AlarmGroup_Placeholder = 16930,
    DiscreteAlarmType_ReAlarmTime = 16931,
    DiscreteAlarmType_ReAlarmRepeatCount = 16932,
    DiscreteAlarmType_Silence = 16933,
    DiscreteAlarmType_Suppress = 16934,
    DataSetFolderType_AddPublishedDataItemsTemplate = 16935,
    OffNormalAlarmType_ConditionSubClassId = 16936,
    OffNormalAlarmType_ConditionSubClassName = 16937,
    OffNormalAlarmType_OutOfServiceState = 16938,
    OffNormalAlarmType_OutOfServiceState_Id = 16939,
    OffNormalAlarmType_OutOfServiceState_Name = 16940,
    OffNormalAlarmType_OutOfServiceState_Number = 16941,
    OffNormalAlarmType_OutOfServiceState_EffectiveDisplayName = 16942,
    OffNormalAlarmType_OutOfServiceState_TransitionTime = 16943,
    OffNormalAlarmType_OutOfServiceState_EffectiveTransitionTime = 16944,
    OffNormalAlarmType_OutOfServiceState_TrueState = 16945,
    OffNormalAlarmType_OutOfServiceState_FalseState = 16946,
    OffNormalAlarmType_SilenceState = 16947,
    OffNormalAlarmType_SilenceState_Id = 16948,
    OffNormalAlarmType_SilenceState_Name = 16949,
    OffNormalAlarmType_SilenceState_Number = 16950,
    OffNormalAlarmType_SilenceState_EffectiveDisplayName = 16951,
    OffNormalAlarmType_SilenceState_TransitionTime = 16952,
    OffNormalAlarmType_SilenceState_EffectiveTransitionTime = 16953,
    OffNormalAlarmType_SilenceState_TrueState = 16954,
    OffNormalAlarmType_SilenceState_FalseState = 16955,
    OffNormalAlarmType_AudibleEnabled = 16956,
    OffNormalAlarmType_AudibleSound = 16957,
    DataSetFolderType_AddPublishedDataItemsTemplate_InputArguments = 16958,
    DataSetFolderType_AddPublishedDataItemsTemplate_OutputArguments = 16959,
    DataSetFolderType_AddPublishedEventsTemplate = 16960,
    DataSetFolderType_AddPublishedEventsTemplate_InputArguments = 16961,
    OffNormalAlarmType_OnDelay = 16962,
    OffNormalAlarmType_OffDelay = 16963,
    OffNormalAlarmType_FirstInGroupFlag = 16964,
    OffNormalAlarmType_FirstInGroup = 16965,
    OffNormalAlarmType_AlarmGroup_Placeholder = 16966,
    OffNormalAlarmType_ReAlarmTime = 16967,
    OffNormalAlarmType_ReAlarmRepeatCount = 16968,
    OffNormalAlarmType_Silence = 16969,
    OffNormalAlarmType_Suppress = 16970,
    DataSetFolderType_AddPublishedEventsTemplate_OutputArguments = 16971,
    SystemOffNormalAlarmType_ConditionSubClassId = 16972,
    SystemOffNormalAlarmType_ConditionSubClassName = 16973,
    SystemOffNormalAlarmType_OutOfServiceState = 16974,
    SystemOffNormalAlarmType_OutOfServiceState_Id = 16975,
    SystemOffNormalAlarmType_OutOfServiceState_Name = 16976,
    SystemOffNormalAlarmType_OutOfServiceState_Number = 16977,
    SystemOffNormalAlarmType_OutOfServiceState_EffectiveDisplayName = 16978,
    SystemOffNormalAlarmType_OutOfServiceState_TransitionTime = 16979,
    SystemOffNormalAlarmType_OutOfServiceState_EffectiveTransitionTime = 16980,
    SystemOffNormalAlarmType_OutOfServiceState_TrueState = 16981,
    SystemOffNormalAlarmType_OutOfServiceState_FalseState = 16982,
    SystemOffNormalAlarmType_SilenceState = 16983,
    SystemOffNormalAlarmType_SilenceState_Id = 16984,
    SystemOffNormalAlarmType_SilenceState_Name = 16985,
    SystemOffNormalAlarmType_SilenceState_Number = 16986,
    SystemOffNormalAlarmType_SilenceState_EffectiveDisplayName = 16987,
    SystemOffNormalAlarmType_SilenceState_TransitionTime = 16988,
    SystemOffNormalAlarmType_SilenceState_EffectiveTransitionTime = 16989,
    SystemOffNormalAlarmType_SilenceState_TrueState = 16990,
    SystemOffNormalAlarmType_SilenceState_FalseState = 16991,
    SystemOffNormalAlarmType_AudibleEnabled = 16992,
    SystemOffNormalAlarmType_AudibleSound = 16993,
    DataSetFolderType_AddDataSetFolder = 16994,
    DataSetFolderType_AddDataSetFolder_InputArguments = 16995,
    DataSetFolderType_AddDataSetFolder_OutputArguments = 16996,
    DataSetFolderType_RemoveDataSetFolder = 16997,
    SystemOffNormalAlarmType_OnDelay = 16998,
    SystemOffNormalAlarmType_OffDelay = 16999,
    SystemOffNormalAlarmType_FirstInGroupFlag = 17000,
    SystemOffNormalAlarmType_FirstInGroup = 17001,
    SystemOffNormalAlarmType_AlarmGroup_Placeholder = 17002,
    SystemOffNormalAlarmType_ReAlarmTime = 17003,
    SystemOffNormalAlarmType_ReAlarmRepeatCount = 17004,
    SystemOffNormalAlarmType_Silence = 17005,
    SystemOffNormalAlarmType_Suppress = 17006,
    DataSetFolderType_RemoveDataSetFolder_InputArguments = 17007,
    TripAlarmType_ConditionSubClassId = 17008,
    TripAlarmType_ConditionSubClassName = 17009,
    TripAlarmType_OutOfServiceState = 17010,
    TripAlarmType_OutOfServiceState_Id = 17011,
    TripAlarmType_OutOfServiceState_Name = 17012,
    TripAlarmType_OutOfServiceState_Number = 17013,
    TripAlarmType_OutOfServiceState_EffectiveDisplayName = 17014,
    TripAlarmType_OutOfServiceState_TransitionTime = 17015,
    TripAlarmType_OutOfServiceState_EffectiveTransitionTime = 17016,
    TripAlarmType_OutOfServiceState_TrueState = 17017,
    TripAlarmType_OutOfServiceState_FalseState = 17018,
    TripAlarmType_SilenceState = 17019,
    TripAlarmType_SilenceState_Id = 17020,
    TripAlarmType_SilenceState_Name = 17021,
    TripAlarmType_SilenceState_Number = 17022,
    TripAlarmType_SilenceState_EffectiveDisplayName = 17023,
    TripAlarmType_SilenceState_TransitionTime = 17024,
    TripAlarmType_SilenceState_EffectiveTransitionTime = 17025,
    TripAlarmType_SilenceState_TrueState = 17026,
    TripAlarmType_SilenceState_FalseState = 17027,
    TripAlarmType_AudibleEnabled = 17028,
    TripAlarmType_AudibleSound = 17029,
    AddPublishedDataItemsTemplateMethodType = 17030,
    AddPublishedDataItemsTemplateMethodType_InputArguments = 17031,
    AddPublishedDataItemsTemplateMethodType_OutputArguments = 17032,
    AddPublishedEventsTemplateMethodType = 17033,
    TripAlarmType_OnDelay = 17034,
    TripAlarmType_OffDelay = 17035,
    TripAlarmType_FirstInGroupFlag = 17036,
    TripAlarmType_FirstInGroup = 17037,
    TripAlarmType_AlarmGroup_Placeholder = 17038,
    TripAlarmType_ReAlarmTime = 17039,
    TripAlarmType_ReAlarmRepeatCount = 17040,
    TripAlarmType_Silence = 17041,
    TripAlarmType_Suppress = 17042,
    AddPublishedEventsTemplateMethodType_InputArguments = 17043,
    CertificateExpirationAlarmType_ConditionSubClassId = 17044,
    CertificateExpirationAlarmType_ConditionSubClassName = 17045,
    CertificateExpirationAlarmType_OutOfServiceState = 17046,
    CertificateExpirationAlarmType_OutOfServiceState_Id = 17047,
    CertificateExpirationAlarmType_OutOfServiceState_Name = 17048,
    CertificateExpirationAlarmType_OutOfServiceState_Number = 17049,
    CertificateExpirationAlarmType_OutOfServiceState_EffectiveDisplayName = 17050,
    CertificateExpirationAlarmType_OutOfServiceState_TransitionTime = 17051,
    CertificateExpirationAlarmType_OutOfServiceState_EffectiveTransitionTime = 17052,
    CertificateExpirationAlarmType_OutOfServiceState_TrueState = 17053,
    CertificateExpirationAlarmType_OutOfServiceState_FalseState = 17054,
    CertificateExpirationAlarmType_SilenceState = 17055,
    CertificateExpirationAlarmType_SilenceState_Id = 17056,
    CertificateExpirationAlarmType_SilenceState_Name = 17057,
    CertificateExpirationAlarmType_SilenceState_Number = 17058,
    CertificateExpirationAlarmType_SilenceState_EffectiveDisplayName = 17059,
    CertificateExpirationAlarmType_SilenceState_TransitionTime = 17060,
    CertificateExpirationAlarmType_SilenceState_EffectiveTransitionTime = 17061,
    CertificateExpirationAlarmType_SilenceState_TrueState = 17062,
    CertificateExpirationAlarmType_SilenceState_FalseState = 17063,
    CertificateExpirationAlarmType_AudibleEnabled = 17064,
    CertificateExpirationAlarmType_AudibleSound = 17065,
    AddPublishedEventsTemplateMethodType_OutputArguments = 17066,
    AddDataSetFolderMethodType = 17067,
    AddDataSetFolderMethodType_InputArguments = 17068,
    AddDataSetFolderMethodType_OutputArguments = 17069,
    CertificateExpirationAlarmType_OnDelay = 17070,
    CertificateExpirationAlarmType_OffDelay = 17071,
    CertificateExpirationAlarmType_FirstInGroupFlag = 17072,
    CertificateExpirationAlarmType_FirstInGroup = 17073,
    CertificateExpirationAlarmType_AlarmGroup_Placeholder = 17074,
    CertificateExpirationAlarmType_ReAlarmTime = 17075,
    CertificateExpirationAlarmType_ReAlarmRepeatCount = 17076,
    CertificateExpirationAlarmType_Silence = 17077,
    CertificateExpirationAlarmType_Suppress = 17078,
    RemoveDataSetFolderMethodType = 17079,
    DiscrepancyAlarmType = 17080,
    DiscrepancyAlarmType_EventId = 17081,
    DiscrepancyAlarmType_EventType = 17082,
    DiscrepancyAlarmType_SourceNode = 17083,
    DiscrepancyAlarmType_SourceName = 17084,
    DiscrepancyAlarmType_Time = 17085,
    DiscrepancyAlarmType_ReceiveTime = 17086,
    DiscrepancyAlarmType_LocalTime = 17087,
    DiscrepancyAlarmType_Message = 17088,
    DiscrepancyAlarmType_Severity = 17089,
    DiscrepancyAlarmType_ConditionClassId = 17090,
    DiscrepancyAlarmType_ConditionClassName = 17091,
    DiscrepancyAlarmType_ConditionSubClassId = 17092,
    DiscrepancyAlarmType_ConditionSubClassName = 17093,
    DiscrepancyAlarmType_ConditionName = 17094,
    DiscrepancyAlarmType_BranchId = 17095,
    DiscrepancyAlarmType_Retain = 17096,
    DiscrepancyAlarmType_EnabledState = 17097,
    DiscrepancyAlarmType_EnabledState_Id = 17098,
    DiscrepancyAlarmType_EnabledState_Name = 17099,
    DiscrepancyAlarmType_EnabledState_Number = 17100,
    DiscrepancyAlarmType_EnabledState_EffectiveDisplayName = 17101,
    DiscrepancyAlarmType_EnabledState_TransitionTime = 17102,
    DiscrepancyAlarmType_EnabledState_EffectiveTransitionTime = 17103,
    DiscrepancyAlarmType_EnabledState_TrueState = 17104,
    DiscrepancyAlarmType_EnabledState_FalseState = 17105,
    DiscrepancyAlarmType_Quality = 17106,
    DiscrepancyAlarmType_Quality_SourceTimestamp = 17107,
    DiscrepancyAlarmType_LastSeverity = 17108,
    DiscrepancyAlarmType_LastSeverity_SourceTimestamp = 17109,
    DiscrepancyAlarmType_Comment = 17110,
    DiscrepancyAlarmType_Comment_SourceTimestamp = 17111,
    DiscrepancyAlarmType_ClientUserId = 17112,
    DiscrepancyAlarmType_Disable = 17113,
    DiscrepancyAlarmType_Enable = 17114,
    DiscrepancyAlarmType_AddComment = 17115,
    DiscrepancyAlarmType_AddComment_InputArguments = 17116,
    DiscrepancyAlarmType_ConditionRefresh = 17117,
    DiscrepancyAlarmType_ConditionRefresh_InputArguments = 17118,
    DiscrepancyAlarmType_ConditionRefresh2 = 17119,
    DiscrepancyAlarmType_ConditionRefresh2_InputArguments = 17120,
    DiscrepancyAlarmType_AckedState = 17121,
    DiscrepancyAlarmType_AckedState_Id = 17122,
    DiscrepancyAlarmType_AckedState_Name = 17123,
    DiscrepancyAlarmType_AckedState_Number = 17124,
    DiscrepancyAlarmType_AckedState_EffectiveDisplayName = 17125,
    DiscrepancyAlarmType_AckedState_TransitionTime = 17126,
    DiscrepancyAlarmType_AckedState_EffectiveTransitionTime = 17127,
    DiscrepancyAlarmType_AckedState_TrueState = 17128,
    DiscrepancyAlarmType_AckedState_FalseState = 17129,
    DiscrepancyAlarmType_ConfirmedState = 17130,
    DiscrepancyAlarmType_ConfirmedState_Id = 17131,
    DiscrepancyAlarmType_ConfirmedState_Name = 17132,
    DiscrepancyAlarmType_ConfirmedState_Number = 17133,
    DiscrepancyAlarmType_ConfirmedState_EffectiveDisplayName = 17134,
    DiscrepancyAlarmType_ConfirmedState_TransitionTime = 17135,
    DiscrepancyAlarmType_ConfirmedState_EffectiveTransitionTime = 17136,
    DiscrepancyAlarmType_ConfirmedState_TrueState = 17137,
    DiscrepancyAlarmType_ConfirmedState_FalseState = 17138,
    DiscrepancyAlarmType_Acknowledge = 17139,
    DiscrepancyAlarmType_Acknowledge_InputArguments = 17140,
    DiscrepancyAlarmType_Confirm = 17141,
    DiscrepancyAlarmType_Confirm_InputArguments = 17142,
    DiscrepancyAlarmType_ActiveState = 17143,
    DiscrepancyAlarmType_ActiveState_Id = 17144,
    DiscrepancyAlarmType_ActiveState_Name = 17145,
    DiscrepancyAlarmType_ActiveState_Number = 17146,
    DiscrepancyAlarmType_ActiveState_EffectiveDisplayName = 17147,
    DiscrepancyAlarmType_ActiveState_TransitionTime = 17148,
    DiscrepancyAlarmType_ActiveState_EffectiveTransitionTime = 17149,
    DiscrepancyAlarmType_ActiveState_TrueState = 17150,
    DiscrepancyAlarmType_ActiveState_FalseState = 17151,
    DiscrepancyAlarmType_InputNode = 17152,
    DiscrepancyAlarmType_SuppressedState = 17153,
    DiscrepancyAlarmType_SuppressedState_Id = 17154,
    DiscrepancyAlarmType_SuppressedState_Name = 17155,
    DiscrepancyAlarmType_SuppressedState_Number = 17156,
    DiscrepancyAlarmType_SuppressedState_EffectiveDisplayName = 17157,
    DiscrepancyAlarmType_SuppressedState_TransitionTime = 17158,
    DiscrepancyAlarmType_SuppressedState_EffectiveTransitionTime = 17159,
    DiscrepancyAlarmType_SuppressedState_TrueState = 17160,
    DiscrepancyAlarmType_SuppressedState_FalseState = 17161,
    DiscrepancyAlarmType_OutOfServiceState = 17162,
    DiscrepancyAlarmType_OutOfServiceState_Id = 17163,
    DiscrepancyAlarmType_OutOfServiceState_Name = 17164,
    DiscrepancyAlarmType_OutOfServiceState_Number = 17165,
    DiscrepancyAlarmType_OutOfServiceState_EffectiveDisplayName = 17166,
    DiscrepancyAlarmType_OutOfServiceState_TransitionTime = 17167,
    DiscrepancyAlarmType_OutOfServiceState_EffectiveTransitionTime = 17168,
    DiscrepancyAlarmType_OutOfServiceState_TrueState = 17169,
    DiscrepancyAlarmType_OutOfServiceState_FalseState = 17170,
    DiscrepancyAlarmType_SilenceState = 17171,
    DiscrepancyAlarmType_SilenceState_Id = 17172,
    DiscrepancyAlarmType_SilenceState_Name = 17173,
    DiscrepancyAlarmType_SilenceState_Number = 17174,
    DiscrepancyAlarmType_SilenceState_EffectiveDisplayName = 17175,
    DiscrepancyAlarmType_SilenceState_TransitionTime = 17176,
    DiscrepancyAlarmType_SilenceState_EffectiveTransitionTime = 17177,
    DiscrepancyAlarmType_SilenceState_TrueState = 17178,
    DiscrepancyAlarmType_SilenceState_FalseState = 17179,
    DiscrepancyAlarmType_ShelvingState = 17180,
    DiscrepancyAlarmType_ShelvingState_CurrentState = 17181,
    DiscrepancyAlarmType_ShelvingState_CurrentState_Id = 17182,
    DiscrepancyAlarmType_ShelvingState_CurrentState_Name = 17183,
    DiscrepancyAlarmType_ShelvingState_CurrentState_Number = 17184,
    DiscrepancyAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 17185,
    DiscrepancyAlarmType_ShelvingState_LastTransition = 17186,
    DiscrepancyAlarmType_ShelvingState_LastTransition_Id = 17187,
    DiscrepancyAlarmType_ShelvingState_LastTransition_Name = 17188,
    DiscrepancyAlarmType_ShelvingState_LastTransition_Number = 17189,
    DiscrepancyAlarmType_ShelvingState_LastTransition_TransitionTime = 17190,
    DiscrepancyAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 17191,
    DiscrepancyAlarmType_ShelvingState_UnshelveTime = 17192,
    DiscrepancyAlarmType_ShelvingState_Unshelve = 17193,
    DiscrepancyAlarmType_ShelvingState_OneShotShelve = 17194,
    DiscrepancyAlarmType_ShelvingState_TimedShelve = 17195,
    DiscrepancyAlarmType_ShelvingState_TimedShelve_InputArguments = 17196,
    DiscrepancyAlarmType_SuppressedOrShelved = 17197,
    DiscrepancyAlarmType_MaxTimeShelved = 17198,
    DiscrepancyAlarmType_AudibleEnabled = 17199,
    DiscrepancyAlarmType_AudibleSound = 17200,
    RemoveDataSetFolderMethodType_InputArguments = 17201,
    PubSubConnectionType_Address_NetworkInterface = 17202,
    PubSubConnectionType_TransportSettings = 17203,
    PubSubConnectionType_WriterGroupName_Placeholder_MaxNetworkMessageSize = 17204,
    DiscrepancyAlarmType_OnDelay = 17205,
    DiscrepancyAlarmType_OffDelay = 17206,
    DiscrepancyAlarmType_FirstInGroupFlag = 17207,
    DiscrepancyAlarmType_FirstInGroup = 17208,
    DiscrepancyAlarmType_AlarmGroup_Placeholder = 17209,
    DiscrepancyAlarmType_ReAlarmTime = 17210,
    DiscrepancyAlarmType_ReAlarmRepeatCount = 17211,
    DiscrepancyAlarmType_Silence = 17212,
    DiscrepancyAlarmType_Suppress = 17213,
    PubSubConnectionType_WriterGroupName_Placeholder_WriterGroupId = 17214,
    DiscrepancyAlarmType_TargetValueNode = 17215,
    DiscrepancyAlarmType_ExpectedTime = 17216,
    DiscrepancyAlarmType_Tolerance = 17217,
    SafetyConditionClassType = 17218,
    HighlyManagedAlarmConditionClassType = 17219,
    TrainingConditionClassType = 17220,
    TestingConditionClassType = 17221,
    AuditConditionCommentEventType_ConditionEventId = 17222,
    AuditConditionAcknowledgeEventType_ConditionEventId = 17223,
    AuditConditionConfirmEventType_ConditionEventId = 17224,
    AuditConditionSuppressionEventType = 17225,
    AuditConditionSuppressionEventType_EventId = 17226,
    AuditConditionSuppressionEventType_EventType = 17227,
    AuditConditionSuppressionEventType_SourceNode = 17228,
    AuditConditionSuppressionEventType_SourceName = 17229,
    AuditConditionSuppressionEventType_Time = 17230,
    AuditConditionSuppressionEventType_ReceiveTime = 17231,
    AuditConditionSuppressionEventType_LocalTime = 17232,
    AuditConditionSuppressionEventType_Message = 17233,
    AuditConditionSuppressionEventType_Severity = 17234,
    AuditConditionSuppressionEventType_ActionTimeStamp = 17235,
    AuditConditionSuppressionEventType_Status = 17236,
    AuditConditionSuppressionEventType_ServerId = 17237,
    AuditConditionSuppressionEventType_ClientAuditEntryId = 17238,
    AuditConditionSuppressionEventType_ClientUserId = 17239,
    AuditConditionSuppressionEventType_MethodId = 17240,
    AuditConditionSuppressionEventType_InputArguments = 17241,
    AuditConditionSilenceEventType = 17242,
    AuditConditionSilenceEventType_EventId = 17243,
    AuditConditionSilenceEventType_EventType = 17244,
    AuditConditionSilenceEventType_SourceNode = 17245,
    AuditConditionSilenceEventType_SourceName = 17246,
    AuditConditionSilenceEventType_Time = 17247,
    AuditConditionSilenceEventType_ReceiveTime = 17248,
    AuditConditionSilenceEventType_LocalTime = 17249,
    AuditConditionSilenceEventType_Message = 17250,
    AuditConditionSilenceEventType_Severity = 17251,
    AuditConditionSilenceEventType_ActionTimeStamp = 17252,
    AuditConditionSilenceEventType_Status = 17253,
    AuditConditionSilenceEventType_ServerId = 17254,
    AuditConditionSilenceEventType_ClientAuditEntryId = 17255,
    AuditConditionSilenceEventType_ClientUserId = 17256,
    AuditConditionSilenceEventType_MethodId = 17257,
    AuditConditionSilenceEventType_InputArguments = 17258,
    AuditConditionOutOfServiceEventType = 17259,
    AuditConditionOutOfServiceEventType_EventId = 17260,
    AuditConditionOutOfServiceEventType_EventType = 17261,
    AuditConditionOutOfServiceEventType_SourceNode = 17262,
    AuditConditionOutOfServiceEventType_SourceName = 17263,
    AuditConditionOutOfServiceEventType_Time = 17264,
    AuditConditionOutOfServiceEventType_ReceiveTime = 17265,
    AuditConditionOutOfServiceEventType_LocalTime = 17266,
    AuditConditionOutOfServiceEventType_Message = 17267,
    AuditConditionOutOfServiceEventType_Severity = 17268,
    AuditConditionOutOfServiceEventType_ActionTimeStamp = 17269,
    AuditConditionOutOfServiceEventType_Status = 17270,
    AuditConditionOutOfServiceEventType_ServerId = 17271,
    AuditConditionOutOfServiceEventType_ClientAuditEntryId = 17272,
    AuditConditionOutOfServiceEventType_ClientUserId = 17273,
    AuditConditionOutOfServiceEventType_MethodId = 17274,
    AuditConditionOutOfServiceEventType_InputArguments = 17275,
    HasEffectDisable = 17276,
    AlarmRateVariableType = 17277,
    AlarmRateVariableType_Rate = 17278,
    AlarmMetricsType = 17279,
    AlarmMetricsType_AlarmCount = 17280,
    AlarmMetricsType_MaximumActiveState = 17281,
    AlarmMetricsType_MaximumUnAck = 17282,
    AlarmMetricsType_MaximumReAlarmCount = 17283,
    AlarmMetricsType_CurrentAlarmRate = 17284,
    AlarmMetricsType_CurrentAlarmRate_Rate = 17285,
    AlarmMetricsType_MaximumAlarmRate = 17286,
    AlarmMetricsType_MaximumAlarmRate_Rate = 17287,
    AlarmMetricsType_AverageAlarmRate = 17288,
    AlarmMetricsType_AverageAlarmRate_Rate = 17289,
    PubSubConnectionType_WriterGroupName_Placeholder_TransportSettings = 17290,
    PubSubConnectionType_WriterGroupName_Placeholder_MessageSettings = 17291,
    PublishSubscribeType_ConnectionName_Placeholder_TransportProfileUri = 17292,
    PubSubConnectionType_WriterGroupName_Placeholder_AddDataSetWriter = 17293,
    PubSubConnectionType_WriterGroupName_Placeholder_AddDataSetWriter_InputArguments = 17294,
    PublishSubscribeType_ConnectionName_Placeholder_TransportProfileUri_RestrictToList = 17295,
    PublishSubscribeType_SetSecurityKeys = 17296,
    PublishSubscribeType_SetSecurityKeys_InputArguments = 17297,
    SetSecurityKeysMethodType = 17298,
    SetSecurityKeysMethodType_InputArguments = 17299,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 17300,
    PubSubConnectionType_WriterGroupName_Placeholder_AddDataSetWriter_OutputArguments = 17301,
    PubSubConnectionType_ReaderGroupName_Placeholder_MaxNetworkMessageSize = 17302,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 17303,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 17304,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 17305,
    PubSubConnectionType_TransportProfileUri = 17306,
    PubSubConnectionType_ReaderGroupName_Placeholder_TransportSettings = 17307,
    PubSubConnectionType_ReaderGroupName_Placeholder_MessageSettings = 17308,
    PubSubConnectionType_TransportProfileUri_RestrictToList = 17309,
    PubSubConnectionType_WriterGroupName_Placeholder = 17310,
    PubSubConnectionType_WriterGroupName_Placeholder_SecurityMode = 17311,
    PubSubConnectionType_WriterGroupName_Placeholder_SecurityGroupId = 17312,
    PubSubConnectionType_WriterGroupName_Placeholder_SecurityKeyServices = 17313,
    PubSubConnectionType_WriterGroupName_Placeholder_Status = 17314,
    PubSubConnectionType_WriterGroupName_Placeholder_Status_State = 17315,
    PubSubConnectionType_WriterGroupName_Placeholder_Status_Enable = 17316,
    PubSubConnectionType_WriterGroupName_Placeholder_Status_Disable = 17317,
    PubSubConnectionType_WriterGroupName_Placeholder_PublishingInterval = 17318,
    PubSubConnectionType_WriterGroupName_Placeholder_KeepAliveTime = 17319,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 17320,
    PubSubConnectionType_WriterGroupName_Placeholder_Priority = 17321,
    PubSubConnectionType_WriterGroupName_Placeholder_LocaleIds = 17322,
    PubSubConnectionType_WriterGroupName_Placeholder_RemoveDataSetWriter = 17323,
    PubSubConnectionType_WriterGroupName_Placeholder_RemoveDataSetWriter_InputArguments = 17324,
    PubSubConnectionType_ReaderGroupName_Placeholder = 17325,
    PubSubConnectionType_ReaderGroupName_Placeholder_SecurityMode = 17326,
    PubSubConnectionType_ReaderGroupName_Placeholder_SecurityGroupId = 17327,
    PubSubConnectionType_ReaderGroupName_Placeholder_SecurityKeyServices = 17328,
    PubSubConnectionType_ReaderGroupName_Placeholder_Status = 17329,
    PubSubConnectionType_ReaderGroupName_Placeholder_Status_State = 17330,
    PubSubConnectionType_ReaderGroupName_Placeholder_Status_Enable = 17331,
    PubSubConnectionType_ReaderGroupName_Placeholder_Status_Disable = 17332,
    PubSubConnectionType_ReaderGroupName_Placeholder_RemoveDataSetReader = 17333,
    PubSubConnectionType_ReaderGroupName_Placeholder_RemoveDataSetReader_InputArguments = 17334,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 17335,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 17336,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 17337,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 17338,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 17339,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 17340,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 17341,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent = 17342,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 17343,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 17344,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 17345,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 17346,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 17347,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 17348,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 17349,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 17350,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 17351,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_LiveValues = 17352,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_LiveValues_ResolvedAddress = 17353,
    PublishSubscribe_ConnectionName_Placeholder_Diagnostics_LiveValues_ResolvedAddress_DiagnosticsLevel = 17354,
    PubSubConnectionType_ReaderGroupName_Placeholder_AddDataSetReader = 17355,
    PublishSubscribe_ConnectionName_Placeholder_AddWriterGroup = 17356,
    PublishSubscribe_ConnectionName_Placeholder_AddWriterGroup_InputArguments = 17357,
    PublishSubscribe_ConnectionName_Placeholder_AddWriterGroup_OutputArguments = 17358,
    PublishSubscribe_ConnectionName_Placeholder_AddReaderGroup = 17359,
    PublishSubscribe_ConnectionName_Placeholder_AddReaderGroup_InputArguments = 17360,
    PublishSubscribe_ConnectionName_Placeholder_AddReaderGroup_OutputArguments = 17361,
    PublishSubscribe_ConnectionName_Placeholder_RemoveGroup = 17362,
    PublishSubscribe_ConnectionName_Placeholder_RemoveGroup_InputArguments = 17363,
    PublishSubscribe_SetSecurityKeys = 17364,
    PublishSubscribe_SetSecurityKeys_InputArguments = 17365,
    PublishSubscribe_AddConnection = 17366,
    PublishSubscribe_AddConnection_InputArguments = 17367,
    PublishSubscribe_AddConnection_OutputArguments = 17368,
    PublishSubscribe_RemoveConnection = 17369,
    PublishSubscribe_RemoveConnection_InputArguments = 17370,
    PublishSubscribe_PublishedDataSets = 17371,
    PublishSubscribe_PublishedDataSets_AddPublishedDataItems = 17372,
    PublishSubscribe_PublishedDataSets_AddPublishedDataItems_InputArguments = 17373,
    PublishSubscribe_PublishedDataSets_AddPublishedDataItems_OutputArguments = 17374,
    PublishSubscribe_PublishedDataSets_AddPublishedEvents = 17375,
    PublishSubscribe_PublishedDataSets_AddPublishedEvents_InputArguments = 17376,
    PublishSubscribe_PublishedDataSets_AddPublishedEvents_OutputArguments = 17377,
    PublishSubscribe_PublishedDataSets_AddPublishedDataItemsTemplate = 17378,
    PublishSubscribe_PublishedDataSets_AddPublishedDataItemsTemplate_InputArguments = 17379,
    PublishSubscribe_PublishedDataSets_AddPublishedDataItemsTemplate_OutputArguments = 17380,
    PublishSubscribe_PublishedDataSets_AddPublishedEventsTemplate = 17381,
    PublishSubscribe_PublishedDataSets_AddPublishedEventsTemplate_InputArguments = 17382,
    PublishSubscribe_PublishedDataSets_AddPublishedEventsTemplate_OutputArguments = 17383,
    PublishSubscribe_PublishedDataSets_RemovePublishedDataSet = 17384,
    PublishSubscribe_PublishedDataSets_RemovePublishedDataSet_InputArguments = 17385,
    DataSetReaderType_CreateTargetVariables = 17386,
    DataSetReaderType_CreateTargetVariables_InputArguments = 17387,
    DataSetReaderType_CreateTargetVariables_OutputArguments = 17388,
    DataSetReaderType_CreateDataSetMirror = 17389,
    DataSetReaderType_CreateDataSetMirror_InputArguments = 17390,
    DataSetReaderType_CreateDataSetMirror_OutputArguments = 17391,
    DataSetReaderTypeCreateTargetVariablesMethodType = 17392,
    DataSetReaderTypeCreateTargetVariablesMethodType_InputArguments = 17393,
    DataSetReaderTypeCreateTargetVariablesMethodType_OutputArguments = 17394,
    DataSetReaderTypeCreateDataSetMirrorMethodType = 17395,
    DataSetReaderTypeCreateDataSetMirrorMethodType_InputArguments = 17396,
    DataSetReaderTypeCreateDataSetMirrorMethodType_OutputArguments = 17397,
    PublishSubscribe_PublishedDataSets_AddDataSetFolder = 17398,
    PubSubConnectionType_ReaderGroupName_Placeholder_AddDataSetReader_InputArguments = 17399,
    PubSubConnectionType_ReaderGroupName_Placeholder_AddDataSetReader_OutputArguments = 17400,
    PublishSubscribe_PublishedDataSets_AddDataSetFolder_InputArguments = 17401,
    PublishSubscribe_PublishedDataSets_AddDataSetFolder_OutputArguments = 17402,
    PublishSubscribe_PublishedDataSets_RemoveDataSetFolder = 17403,
    PublishSubscribe_PublishedDataSets_RemoveDataSetFolder_InputArguments = 17404,
    PublishSubscribe_Status = 17405,
    PublishSubscribe_Status_State = 17406,
    PublishSubscribe_Status_Enable = 17407,
    PublishSubscribe_Status_Disable = 17408,
    PublishSubscribe_Diagnostics = 17409,
    PublishSubscribe_Diagnostics_DiagnosticsLevel = 17410,
    PublishSubscribe_Diagnostics_TotalInformation = 17411,
    PublishSubscribe_Diagnostics_TotalInformation_Active = 17412,
    PublishSubscribe_Diagnostics_TotalInformation_Classification = 17413,
    PublishSubscribe_Diagnostics_TotalInformation_DiagnosticsLevel = 17414,
    PublishSubscribe_Diagnostics_TotalInformation_TimeFirstChange = 17415,
    PublishSubscribe_Diagnostics_TotalError = 17416,
    PublishSubscribe_Diagnostics_TotalError_Active = 17417,
    PublishSubscribe_Diagnostics_TotalError_Classification = 17418,
    PublishSubscribe_Diagnostics_TotalError_DiagnosticsLevel = 17419,
    PublishSubscribe_Diagnostics_TotalError_TimeFirstChange = 17420,
    PublishSubscribe_Diagnostics_Reset = 17421,
    PublishSubscribe_Diagnostics_SubError = 17422,
    PublishSubscribe_Diagnostics_Counters = 17423,
    PublishSubscribe_Diagnostics_Counters_StateError = 17424,
    PublishSubscribe_Diagnostics_Counters_StateError_Active = 17425,
    PublishSubscribe_Diagnostics_Counters_StateError_Classification = 17426,
    PubSubConnectionType_AddWriterGroup = 17427,
    PubSubConnectionType_AddWriterGroup_InputArguments = 17428,
    PublishSubscribe_Diagnostics_Counters_StateError_DiagnosticsLevel = 17429,
    PublishSubscribe_Diagnostics_Counters_StateError_TimeFirstChange = 17430,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByMethod = 17431,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByMethod_Active = 17432,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByMethod_Classification = 17433,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 17434,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 17435,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByParent = 17436,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByParent_Active = 17437,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByParent_Classification = 17438,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 17439,
    PublishSubscribe_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 17440,
    PublishSubscribe_Diagnostics_Counters_StateOperationalFromError = 17441,
    PublishSubscribe_Diagnostics_Counters_StateOperationalFromError_Active = 17442,
    PublishSubscribe_Diagnostics_Counters_StateOperationalFromError_Classification = 17443,
    PublishSubscribe_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 17444,
    PublishSubscribe_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 17445,
    PublishSubscribe_Diagnostics_Counters_StatePausedByParent = 17446,
    PublishSubscribe_Diagnostics_Counters_StatePausedByParent_Active = 17447,
    PublishSubscribe_Diagnostics_Counters_StatePausedByParent_Classification = 17448,
    PublishSubscribe_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 17449,
    PublishSubscribe_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 17450,
    PublishSubscribe_Diagnostics_Counters_StateDisabledByMethod = 17451,
    PublishSubscribe_Diagnostics_Counters_StateDisabledByMethod_Active = 17452,
    PublishSubscribe_Diagnostics_Counters_StateDisabledByMethod_Classification = 17453,
    PublishSubscribe_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 17454,
    PublishSubscribe_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 17455,
    PubSubConnectionType_AddWriterGroup_OutputArguments = 17456,
    PublishSubscribe_Diagnostics_LiveValues = 17457,
    PublishSubscribe_Diagnostics_LiveValues_ConfiguredDataSetWriters = 17458,
    PublishSubscribe_Diagnostics_LiveValues_ConfiguredDataSetWriters_DiagnosticsLevel = 17459,
    PublishSubscribe_Diagnostics_LiveValues_ConfiguredDataSetReaders = 17460,
    PublishSubscribe_Diagnostics_LiveValues_ConfiguredDataSetReaders_DiagnosticsLevel = 17461,
    PublishSubscribe_Diagnostics_LiveValues_OperationalDataSetWriters = 17462,
    PublishSubscribe_Diagnostics_LiveValues_OperationalDataSetWriters_DiagnosticsLevel = 17463,
    PublishSubscribe_Diagnostics_LiveValues_OperationalDataSetReaders = 17464,
    PubSubConnectionType_AddReaderGroup = 17465,
    PublishSubscribe_Diagnostics_LiveValues_OperationalDataSetReaders_DiagnosticsLevel = 17466,
    DatagramConnectionTransportDataType = 17467,
    DatagramConnectionTransportDataType_Encoding_DefaultBinary = 17468,
    OpcUa_BinarySchema_DatagramConnectionTransportDataType = 17469,
    OpcUa_BinarySchema_DatagramConnectionTransportDataType_DataTypeVersion = 17470,
    OpcUa_BinarySchema_DatagramConnectionTransportDataType_DictionaryFragment = 17471,
    DatagramConnectionTransportDataType_Encoding_DefaultJson = 17476,
    UadpDataSetReaderMessageType_DataSetOffset = 17477,
    PublishSubscribeType_ConnectionName_Placeholder_ConnectionProperties = 17478,
    PublishSubscribeType_SupportedTransportProfiles = 17479,
    PublishSubscribe_ConnectionName_Placeholder_ConnectionProperties = 17480,
    PublishSubscribe_SupportedTransportProfiles = 17481,
    PublishedDataSetType_DataSetWriterName_Placeholder_DataSetWriterProperties = 17482,
    PublishedDataItemsType_DataSetWriterName_Placeholder_DataSetWriterProperties = 17483,
    PublishedEventsType_DataSetWriterName_Placeholder_DataSetWriterProperties = 17484,
    PubSubConnectionType_ConnectionProperties = 17485,
    PubSubConnectionType_WriterGroupName_Placeholder_GroupProperties = 17486,
    PubSubConnectionType_ReaderGroupName_Placeholder_GroupProperties = 17487,
    PubSubGroupType_GroupProperties = 17488,
    WriterGroupType_GroupProperties = 17489,
    WriterGroupType_DataSetWriterName_Placeholder_DataSetWriterProperties = 17490,
    ReaderGroupType_GroupProperties = 17491,
    ReaderGroupType_DataSetReaderName_Placeholder_DataSetReaderProperties = 17492,
    DataSetWriterType_DataSetWriterProperties = 17493,
    DataSetReaderType_DataSetReaderProperties = 17494,
    CreateCredentialMethodType_OutputArguments = 17495,
    KeyCredentialConfigurationFolderType = 17496,
    AnalogUnitType = 17497,
    AnalogUnitType_Definition = 17498,
    AnalogUnitType_ValuePrecision = 17499,
    AnalogUnitType_InstrumentRange = 17500,
    AnalogUnitType_EURange = 17501,
    AnalogUnitType_EngineeringUnits = 17502,
    PublishSubscribeType_ConnectionName_Placeholder_Address_NetworkInterface_Selections = 17503,
    PublishSubscribeType_ConnectionName_Placeholder_Address_NetworkInterface_SelectionDescriptions = 17504,
    PublishSubscribeType_ConnectionName_Placeholder_Address_NetworkInterface_RestrictToList = 17505,
    PublishSubscribe_ConnectionName_Placeholder_Address_NetworkInterface_Selections = 17506,
    PubSubConnectionType_AddReaderGroup_InputArguments = 17507,
    PubSubConnectionType_AddReaderGroup_OutputArguments = 17508,
    PublishSubscribe_ConnectionName_Placeholder_Address_NetworkInterface_SelectionDescriptions = 17509,
    PublishSubscribe_ConnectionName_Placeholder_Address_NetworkInterface_RestrictToList = 17510,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder = 17511,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_ResourceUri = 17512,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_ProfileUri = 17513,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_EndpointUrls = 17514,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_ServiceStatus = 17515,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_GetEncryptingKey = 17516,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_GetEncryptingKey_InputArguments = 17517,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_GetEncryptingKey_OutputArguments = 17518,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_UpdateCredential = 17519,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_UpdateCredential_InputArguments = 17520,
    KeyCredentialConfigurationFolderType_ServiceName_Placeholder_DeleteCredential = 17521,
    KeyCredentialConfigurationFolderType_CreateCredential = 17522,
    KeyCredentialConfigurationFolderType_CreateCredential_InputArguments = 17523,
    KeyCredentialConfigurationFolderType_CreateCredential_OutputArguments = 17524,
    KeyCredentialConfiguration_ServiceName_Placeholder_GetEncryptingKey = 17525,
    KeyCredentialConfiguration_ServiceName_Placeholder_GetEncryptingKey_InputArguments = 17526,
    KeyCredentialConfiguration_ServiceName_Placeholder_GetEncryptingKey_OutputArguments = 17527,
    KeyCredentialConfiguration_CreateCredential = 17528,
    KeyCredentialConfiguration_CreateCredential_InputArguments = 17529,
    KeyCredentialConfiguration_CreateCredential_OutputArguments = 17530,
    GetEncryptingKeyMethodType = 17531,
    GetEncryptingKeyMethodType_InputArguments = 17532,
    GetEncryptingKeyMethodType_OutputArguments = 17533,
    KeyCredentialConfigurationType_GetEncryptingKey = 17534,
    KeyCredentialConfigurationType_GetEncryptingKey_InputArguments = 17535,
    KeyCredentialConfigurationType_GetEncryptingKey_OutputArguments = 17536,
    AdditionalParametersType_Encoding_DefaultBinary = 17537,
    OpcUa_BinarySchema_AdditionalParametersType = 17538,
    OpcUa_BinarySchema_AdditionalParametersType_DataTypeVersion = 17539,
    OpcUa_BinarySchema_AdditionalParametersType_DictionaryFragment = 17540,
    RsaEncryptedSecret = 17545,
    EccEncryptedSecret = 17546,
    AdditionalParametersType_Encoding_DefaultJson = 17547,
    EphemeralKeyType = 17548,
    EphemeralKeyType_Encoding_DefaultBinary = 17549,
    OpcUa_BinarySchema_EphemeralKeyType = 17550,
    OpcUa_BinarySchema_EphemeralKeyType_DataTypeVersion = 17551,
    OpcUa_BinarySchema_EphemeralKeyType_DictionaryFragment = 17552,
    EphemeralKeyType_Encoding_DefaultJson = 17557,
    PubSubConnectionType_WriterGroupName_Placeholder_HeaderLayoutUri = 17558,
    WriterGroupType_HeaderLayoutUri = 17559,
    ReaderGroupType_DataSetReaderName_Placeholder_KeyFrameCount = 17560,
    PubSubConnectionTypeAddWriterGroupMethodType = 17561,
    ReaderGroupType_DataSetReaderName_Placeholder_HeaderLayoutUri = 17562,
    DataSetReaderType_KeyFrameCount = 17563,
    DataSetReaderType_HeaderLayoutUri = 17564,
    BaseAnalogType_Definition = 17565,
    BaseAnalogType_ValuePrecision = 17566,
    BaseAnalogType_InstrumentRange = 17567,
    BaseAnalogType_EURange = 17568,
    BaseAnalogType_EngineeringUnits = 17569,
    AnalogUnitRangeType = 17570,
    AnalogUnitRangeType_Definition = 17571,
    AnalogUnitRangeType_ValuePrecision = 17572,
    AnalogUnitRangeType_InstrumentRange = 17573,
    AnalogUnitRangeType_EURange = 17574,
    AnalogUnitRangeType_EngineeringUnits = 17575,
    PubSubConnectionType_Address_NetworkInterface_Selections = 17576,
    PubSubConnectionType_Address_NetworkInterface_SelectionDescriptions = 17577,
    PubSubConnectionType_Address_NetworkInterface_RestrictToList = 17578,
    DatagramConnectionTransportType_DiscoveryAddress_NetworkInterface_Selections = 17579,
    DatagramConnectionTransportType_DiscoveryAddress_NetworkInterface_SelectionDescriptions = 17580,
    DatagramConnectionTransportType_DiscoveryAddress_NetworkInterface_RestrictToList = 17581,
    NetworkAddressType_NetworkInterface_Selections = 17582,
    NetworkAddressType_NetworkInterface_SelectionDescriptions = 17583,
    NetworkAddressType_NetworkInterface_RestrictToList = 17584,
    NetworkAddressUrlType_NetworkInterface_Selections = 17585,
    NetworkAddressUrlType_NetworkInterface_SelectionDescriptions = 17586,
    NetworkAddressUrlType_NetworkInterface_RestrictToList = 17587,
    Index = 17588,
    DictionaryEntryType = 17589,
    DictionaryEntryType_DictionaryEntryName_Placeholder = 17590,
    DictionaryFolderType = 17591,
    DictionaryFolderType_DictionaryFolderName_Placeholder = 17592,
    DictionaryFolderType_DictionaryEntryName_Placeholder = 17593,
    Dictionaries = 17594,
    Dictionaries_DictionaryFolderName_Placeholder = 17595,
    Dictionaries_DictionaryEntryName_Placeholder = 17596,
    HasDictionaryEntry = 17597,
    IrdiDictionaryEntryType = 17598,
    IrdiDictionaryEntryType_DictionaryEntryName_Placeholder = 17599,
    UriDictionaryEntryType = 17600,
    UriDictionaryEntryType_DictionaryEntryName_Placeholder = 17601,
    BaseInterfaceType = 17602,
    HasInterface = 17603,
    HasAddIn = 17604,
    DefaultInstanceBrowseName = 17605,
    GenericAttributeValue = 17606,
    GenericAttributes = 17607,
    GenericAttributeValue_Encoding_DefaultBinary = 17610,
    GenericAttributes_Encoding_DefaultBinary = 17611,
    ServerType_LocalTime = 17612,
    PubSubConnectionTypeAddWriterGroupMethodType_InputArguments = 17613,
    PubSubConnectionTypeAddWriterGroupMethodType_OutputArguments = 17614,
    AuditSecurityEventType_StatusCodeId = 17615,
    AuditChannelEventType_StatusCodeId = 17616,
    AuditOpenSecureChannelEventType_StatusCodeId = 17617,
    AuditSessionEventType_StatusCodeId = 17618,
    AuditCreateSessionEventType_StatusCodeId = 17619,
    AuditUrlMismatchEventType_StatusCodeId = 17620,
    AuditActivateSessionEventType_StatusCodeId = 17621,
    AuditCancelEventType_StatusCodeId = 17622,
    AuditCertificateEventType_StatusCodeId = 17623,
    AuditCertificateDataMismatchEventType_StatusCodeId = 17624,
    AuditCertificateExpiredEventType_StatusCodeId = 17625,
    AuditCertificateInvalidEventType_StatusCodeId = 17626,
    AuditCertificateUntrustedEventType_StatusCodeId = 17627,
    AuditCertificateRevokedEventType_StatusCodeId = 17628,
    AuditCertificateMismatchEventType_StatusCodeId = 17629,
    PubSubConnectionAddReaderGroupGroupMethodType = 17630,
    PubSubConnectionAddReaderGroupGroupMethodType_InputArguments = 17631,
    SelectionListType_Selections = 17632,
    SelectionListType_SelectionDescriptions = 17633,
    Server_LocalTime = 17634,
    FiniteStateMachineType_AvailableStates = 17635,
    FiniteStateMachineType_AvailableTransitions = 17636,
    TemporaryFileTransferType_TransferState_Placeholder_AvailableStates = 17637,
    TemporaryFileTransferType_TransferState_Placeholder_AvailableTransitions = 17638,
    FileTransferStateMachineType_AvailableStates = 17639,
    FileTransferStateMachineType_AvailableTransitions = 17640,
    RoleMappingRuleChangedAuditEventType = 17641,
    RoleMappingRuleChangedAuditEventType_EventId = 17642,
    RoleMappingRuleChangedAuditEventType_EventType = 17643,
    RoleMappingRuleChangedAuditEventType_SourceNode = 17644,
    RoleMappingRuleChangedAuditEventType_SourceName = 17645,
    RoleMappingRuleChangedAuditEventType_Time = 17646,
    RoleMappingRuleChangedAuditEventType_ReceiveTime = 17647,
    RoleMappingRuleChangedAuditEventType_LocalTime = 17648,
    RoleMappingRuleChangedAuditEventType_Message = 17649,
    RoleMappingRuleChangedAuditEventType_Severity = 17650,
    RoleMappingRuleChangedAuditEventType_ActionTimeStamp = 17651,
    RoleMappingRuleChangedAuditEventType_Status = 17652,
    RoleMappingRuleChangedAuditEventType_ServerId = 17653,
    RoleMappingRuleChangedAuditEventType_ClientAuditEntryId = 17654,
    RoleMappingRuleChangedAuditEventType_ClientUserId = 17655,
    RoleMappingRuleChangedAuditEventType_MethodId = 17656,
    RoleMappingRuleChangedAuditEventType_InputArguments = 17657,
    AlarmConditionType_ShelvingState_AvailableStates = 17658,
    AlarmConditionType_ShelvingState_AvailableTransitions = 17659,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_AvailableStates = 17660,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_AvailableTransitions = 17661,
    ShelvedStateMachineType_AvailableStates = 17662,
    ShelvedStateMachineType_AvailableTransitions = 17663,
    LimitAlarmType_ShelvingState_AvailableStates = 17664,
    LimitAlarmType_ShelvingState_AvailableTransitions = 17665,
    ExclusiveLimitStateMachineType_AvailableStates = 17666,
    ExclusiveLimitStateMachineType_AvailableTransitions = 17667,
    ExclusiveLimitAlarmType_ShelvingState_AvailableStates = 17668,
    ExclusiveLimitAlarmType_ShelvingState_AvailableTransitions = 17669,
    ExclusiveLimitAlarmType_LimitState_AvailableStates = 17670,
    ExclusiveLimitAlarmType_LimitState_AvailableTransitions = 17671,
    NonExclusiveLimitAlarmType_ShelvingState_AvailableStates = 17672,
    NonExclusiveLimitAlarmType_ShelvingState_AvailableTransitions = 17673,
    NonExclusiveLevelAlarmType_ShelvingState_AvailableStates = 17674,
    NonExclusiveLevelAlarmType_ShelvingState_AvailableTransitions = 17675,
    ExclusiveLevelAlarmType_ShelvingState_AvailableStates = 17676,
    ExclusiveLevelAlarmType_ShelvingState_AvailableTransitions = 17677,
    ExclusiveLevelAlarmType_LimitState_AvailableStates = 17678,
    ExclusiveLevelAlarmType_LimitState_AvailableTransitions = 17679,
    NonExclusiveDeviationAlarmType_ShelvingState_AvailableStates = 17680,
    NonExclusiveDeviationAlarmType_ShelvingState_AvailableTransitions = 17681,
    ExclusiveDeviationAlarmType_ShelvingState_AvailableStates = 17682,
    ExclusiveDeviationAlarmType_ShelvingState_AvailableTransitions = 17683,
    ExclusiveDeviationAlarmType_LimitState_AvailableStates = 17684,
    ExclusiveDeviationAlarmType_LimitState_AvailableTransitions = 17685,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_AvailableStates = 17686,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_AvailableTransitions = 17687,
    ExclusiveRateOfChangeAlarmType_ShelvingState_AvailableStates = 17688,
    ExclusiveRateOfChangeAlarmType_ShelvingState_AvailableTransitions = 17689,
    ExclusiveRateOfChangeAlarmType_LimitState_AvailableStates = 17690,
    ExclusiveRateOfChangeAlarmType_LimitState_AvailableTransitions = 17691,
    DiscreteAlarmType_ShelvingState_AvailableStates = 17692,
    DiscreteAlarmType_ShelvingState_AvailableTransitions = 17693,
    OffNormalAlarmType_ShelvingState_AvailableStates = 17694,
    OffNormalAlarmType_ShelvingState_AvailableTransitions = 17695,
    SystemOffNormalAlarmType_ShelvingState_AvailableStates = 17696,
    SystemOffNormalAlarmType_ShelvingState_AvailableTransitions = 17697,
    TripAlarmType_ShelvingState_AvailableStates = 17698,
    TripAlarmType_ShelvingState_AvailableTransitions = 17699,
    CertificateExpirationAlarmType_ShelvingState_AvailableStates = 17700,
    CertificateExpirationAlarmType_ShelvingState_AvailableTransitions = 17701,
    DiscrepancyAlarmType_ShelvingState_AvailableStates = 17702,
    DiscrepancyAlarmType_ShelvingState_AvailableTransitions = 17703,
    ProgramStateMachineType_AvailableStates = 17704,
    ProgramStateMachineType_AvailableTransitions = 17705,
    PublishSubscribeType_ConnectionName_Placeholder_TransportProfileUri_Selections = 17706,
    PublishSubscribeType_ConnectionName_Placeholder_TransportProfileUri_SelectionDescriptions = 17707,
    InterfaceTypes = 17708,
    RationalNumberType = 17709,
    PubSubConnectionType_TransportProfileUri_Selections = 17710,
    PubSubConnectionType_TransportProfileUri_SelectionDescriptions = 17711,
    RationalNumberType_Numerator = 17712,
    RationalNumberType_Denominator = 17713,
    VectorType = 17714,
    VectorType_VectorUnit = 17715,
    ThreeDVectorType = 17716,
    ThreeDVectorType_VectorUnit = 17717,
    FileDirectoryType_FileDirectoryName_Placeholder_DeleteFileSystemObject = 17718,
    FileDirectoryType_FileDirectoryName_Placeholder_DeleteFileSystemObject_InputArguments = 17719,
    PubSubConnectionAddReaderGroupGroupMethodType_OutputArguments = 17720,
    ConnectionTransportType = 17721,
    FileSystem_FileDirectoryName_Placeholder_DeleteFileSystemObject = 17722,
    FileSystem_FileDirectoryName_Placeholder_DeleteFileSystemObject_InputArguments = 17723,
    PubSubGroupType_MaxNetworkMessageSize = 17724,
    WriterGroupType = 17725,
    WriterGroupType_SecurityMode = 17726,
    WriterGroupType_SecurityGroupId = 17727,
    WriterGroupType_SecurityKeyServices = 17728,
    WriterGroupType_MaxNetworkMessageSize = 17729,
    WriterGroupType_Status = 17730,
    WriterGroupType_Status_State = 17731,
    AuthorizationServices = 17732,
    WriterGroupType_Status_Enable = 17734,
    WriterGroupType_Status_Disable = 17735,
    WriterGroupType_WriterGroupId = 17736,
    WriterGroupType_PublishingInterval = 17737,
    WriterGroupType_KeepAliveTime = 17738,
    WriterGroupType_Priority = 17739,
    WriterGroupType_LocaleIds = 17740,
    WriterGroupType_TransportSettings = 17741,
    WriterGroupType_MessageSettings = 17742,
    WriterGroupType_DataSetWriterName_Placeholder = 17743,
    WriterGroupType_DataSetWriterName_Placeholder_DataSetWriterId = 17744,
    WriterGroupType_DataSetWriterName_Placeholder_DataSetFieldContentMask = 17745,
    WriterGroupType_DataSetWriterName_Placeholder_KeyFrameCount = 17746,
    WriterGroupType_DataSetWriterName_Placeholder_TransportSettings = 17747,
    WriterGroupType_DataSetWriterName_Placeholder_MessageSettings = 17748,
    WriterGroupType_DataSetWriterName_Placeholder_Status = 17749,
    WriterGroupType_DataSetWriterName_Placeholder_Status_State = 17750,
    WriterGroupType_DataSetWriterName_Placeholder_Status_Enable = 17751,
    WriterGroupType_DataSetWriterName_Placeholder_Status_Disable = 17752,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics = 17753,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_DiagnosticsLevel = 17754,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation = 17755,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_Active = 17756,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_Classification = 17757,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 17758,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 17759,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalError = 17760,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalError_Active = 17761,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalError_Classification = 17762,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 17763,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 17764,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Reset = 17765,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_SubError = 17766,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters = 17767,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError = 17768,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_Active = 17769,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_Classification = 17770,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 17771,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 17772,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 17773,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 17774,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 17775,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 17776,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 17777,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 17778,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 17779,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 17780,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 17781,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 17782,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 17783,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 17784,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 17785,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 17786,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 17787,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent = 17788,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 17789,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 17790,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 17791,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 17792,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 17793,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 17794,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 17795,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 17796,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 17797,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues = 17798,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages = 17799,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Active = 17800,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Classification = 17801,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_DiagnosticsLevel = 17802,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_TimeFirstChange = 17803,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber = 17804,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 17805,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_StatusCode = 17806,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_StatusCode_DiagnosticsLevel = 17807,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MajorVersion = 17808,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MajorVersion_DiagnosticsLevel = 17809,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MinorVersion = 17810,
    WriterGroupType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MinorVersion_DiagnosticsLevel = 17811,
    WriterGroupType_Diagnostics = 17812,
    WriterGroupType_Diagnostics_DiagnosticsLevel = 17813,
    WriterGroupType_Diagnostics_TotalInformation = 17814,
    WriterGroupType_Diagnostics_TotalInformation_Active = 17815,
    WriterGroupType_Diagnostics_TotalInformation_Classification = 17816,
    WriterGroupType_Diagnostics_TotalInformation_DiagnosticsLevel = 17817,
    WriterGroupType_Diagnostics_TotalInformation_TimeFirstChange = 17818,
    WriterGroupType_Diagnostics_TotalError = 17819,
    WriterGroupType_Diagnostics_TotalError_Active = 17820,
    WriterGroupType_Diagnostics_TotalError_Classification = 17821,
    WriterGroupType_Diagnostics_TotalError_DiagnosticsLevel = 17822,
    WriterGroupType_Diagnostics_TotalError_TimeFirstChange = 17823,
    WriterGroupType_Diagnostics_Reset = 17824,
    WriterGroupType_Diagnostics_SubError = 17825,
    WriterGroupType_Diagnostics_Counters = 17826,
    WriterGroupType_Diagnostics_Counters_StateError = 17827,
    WriterGroupType_Diagnostics_Counters_StateError_Active = 17828,
    WriterGroupType_Diagnostics_Counters_StateError_Classification = 17829,
    WriterGroupType_Diagnostics_Counters_StateError_DiagnosticsLevel = 17830,
    WriterGroupType_Diagnostics_Counters_StateError_TimeFirstChange = 17831,
    WriterGroupType_Diagnostics_Counters_StateOperationalByMethod = 17832,
    WriterGroupType_Diagnostics_Counters_StateOperationalByMethod_Active = 17833,
    WriterGroupType_Diagnostics_Counters_StateOperationalByMethod_Classification = 17834,
    WriterGroupType_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 17835,
    WriterGroupType_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 17836,
    WriterGroupType_Diagnostics_Counters_StateOperationalByParent = 17837,
    WriterGroupType_Diagnostics_Counters_StateOperationalByParent_Active = 17838,
    WriterGroupType_Diagnostics_Counters_StateOperationalByParent_Classification = 17839,
    WriterGroupType_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 17840,
    WriterGroupType_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 17841,
    WriterGroupType_Diagnostics_Counters_StateOperationalFromError = 17842,
    WriterGroupType_Diagnostics_Counters_StateOperationalFromError_Active = 17843,
    WriterGroupType_Diagnostics_Counters_StateOperationalFromError_Classification = 17844,
    WriterGroupType_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 17845,
    WriterGroupType_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 17846,
    WriterGroupType_Diagnostics_Counters_StatePausedByParent = 17847,
    WriterGroupType_Diagnostics_Counters_StatePausedByParent_Active = 17848,
    WriterGroupType_Diagnostics_Counters_StatePausedByParent_Classification = 17849,
    WriterGroupType_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 17850,
    WriterGroupType_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 17851,
    AuthorizationServiceConfigurationType = 17852,
    WriterGroupType_Diagnostics_Counters_StateDisabledByMethod = 17853,
    WriterGroupType_Diagnostics_Counters_StateDisabledByMethod_Active = 17854,
    WriterGroupType_Diagnostics_Counters_StateDisabledByMethod_Classification = 17855,
    WriterGroupType_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 17856,
    WriterGroupType_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 17857,
    WriterGroupType_Diagnostics_LiveValues = 17858,
    WriterGroupType_Diagnostics_Counters_SentNetworkMessages = 17859,
    AuthorizationServiceConfigurationType_ServiceCertificate = 17860,
    DecimalDataType = 17861,
    DecimalDataType_Encoding_DefaultBinary = 17863,
    WriterGroupType_Diagnostics_Counters_SentNetworkMessages_Active = 17864,
    AlarmConditionType_AudibleSound_ListId = 17865,
    AlarmConditionType_AudibleSound_AgencyId = 17866,
    AlarmConditionType_AudibleSound_VersionId = 17867,
    AlarmConditionType_Unsuppress = 17868,
    AlarmConditionType_RemoveFromService = 17869,
    AlarmConditionType_PlaceInService = 17870,
    WriterGroupType_Diagnostics_Counters_SentNetworkMessages_Classification = 17871,
    WriterGroupType_Diagnostics_Counters_SentNetworkMessages_DiagnosticsLevel = 17872,
    WriterGroupType_Diagnostics_Counters_SentNetworkMessages_TimeFirstChange = 17873,
    WriterGroupType_Diagnostics_Counters_FailedTransmissions = 17874,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Unsuppress = 17875,
    AlarmGroupType_AlarmConditionInstance_Placeholder_RemoveFromService = 17876,
    AlarmGroupType_AlarmConditionInstance_Placeholder_PlaceInService = 17877,
    WriterGroupType_Diagnostics_Counters_FailedTransmissions_Active = 17878,
    LimitAlarmType_AudibleSound_ListId = 17879,
    LimitAlarmType_AudibleSound_AgencyId = 17880,
    LimitAlarmType_AudibleSound_VersionId = 17881,
    LimitAlarmType_Unsuppress = 17882,
    LimitAlarmType_RemoveFromService = 17883,
    LimitAlarmType_PlaceInService = 17884,
    WriterGroupType_Diagnostics_Counters_FailedTransmissions_Classification = 17885,
    ExclusiveLimitAlarmType_AudibleSound_ListId = 17886,
    ExclusiveLimitAlarmType_AudibleSound_AgencyId = 17887,
    ExclusiveLimitAlarmType_AudibleSound_VersionId = 17888,
    ExclusiveLimitAlarmType_Unsuppress = 17889,
    ExclusiveLimitAlarmType_RemoveFromService = 17890,
    ExclusiveLimitAlarmType_PlaceInService = 17891,
    WriterGroupType_Diagnostics_Counters_FailedTransmissions_DiagnosticsLevel = 17892,
    NonExclusiveLimitAlarmType_AudibleSound_ListId = 17893,
    NonExclusiveLimitAlarmType_AudibleSound_AgencyId = 17894,
    NonExclusiveLimitAlarmType_AudibleSound_VersionId = 17895,
    NonExclusiveLimitAlarmType_Unsuppress = 17896,
    NonExclusiveLimitAlarmType_RemoveFromService = 17897,
    NonExclusiveLimitAlarmType_PlaceInService = 17898,
    WriterGroupType_Diagnostics_Counters_FailedTransmissions_TimeFirstChange = 17899,
    WriterGroupType_Diagnostics_Counters_EncryptionErrors = 17900,
    WriterGroupType_Diagnostics_Counters_EncryptionErrors_Active = 17901,
    WriterGroupType_Diagnostics_Counters_EncryptionErrors_Classification = 17902,
    WriterGroupType_Diagnostics_Counters_EncryptionErrors_DiagnosticsLevel = 17903,
    NonExclusiveLevelAlarmType_RemoveFromService = 17904,
    NonExclusiveLevelAlarmType_PlaceInService = 17905,
    WriterGroupType_Diagnostics_Counters_EncryptionErrors_TimeFirstChange = 17906,
    ExclusiveLevelAlarmType_AudibleSound_ListId = 17907,
    ExclusiveLevelAlarmType_AudibleSound_AgencyId = 17908,
    ExclusiveLevelAlarmType_AudibleSound_VersionId = 17909,
    ExclusiveLevelAlarmType_Unsuppress = 17910,
    ExclusiveLevelAlarmType_RemoveFromService = 17911,
    ExclusiveLevelAlarmType_PlaceInService = 17912,
    WriterGroupType_Diagnostics_LiveValues_ConfiguredDataSetWriters = 17913,
    NonExclusiveDeviationAlarmType_AudibleSound_ListId = 17914,
    NonExclusiveDeviationAlarmType_AudibleSound_AgencyId = 17915,
    NonExclusiveDeviationAlarmType_AudibleSound_VersionId = 17916,
    NonExclusiveDeviationAlarmType_Unsuppress = 17917,
    NonExclusiveDeviationAlarmType_RemoveFromService = 17918,
    NonExclusiveDeviationAlarmType_PlaceInService = 17919,
    WriterGroupType_Diagnostics_LiveValues_ConfiguredDataSetWriters_DiagnosticsLevel = 17920,
    NonExclusiveRateOfChangeAlarmType_AudibleSound_ListId = 17921,
    NonExclusiveRateOfChangeAlarmType_AudibleSound_AgencyId = 17922,
    NonExclusiveRateOfChangeAlarmType_AudibleSound_VersionId = 17923,
    NonExclusiveRateOfChangeAlarmType_Unsuppress = 17924,
    NonExclusiveRateOfChangeAlarmType_RemoveFromService = 17925,
    NonExclusiveRateOfChangeAlarmType_PlaceInService = 17926,
    WriterGroupType_Diagnostics_LiveValues_OperationalDataSetWriters = 17927,
    ExclusiveDeviationAlarmType_AudibleSound_ListId = 17928,
    ExclusiveDeviationAlarmType_AudibleSound_AgencyId = 17929,
    ExclusiveDeviationAlarmType_AudibleSound_VersionId = 17930,
    ExclusiveDeviationAlarmType_Unsuppress = 17931,
    ExclusiveDeviationAlarmType_RemoveFromService = 17932,
    ExclusiveDeviationAlarmType_PlaceInService = 17933,
    WriterGroupType_Diagnostics_LiveValues_OperationalDataSetWriters_DiagnosticsLevel = 17934,
    ExclusiveRateOfChangeAlarmType_AudibleSound_ListId = 17935,
    ExclusiveRateOfChangeAlarmType_AudibleSound_AgencyId = 17936,
    ExclusiveRateOfChangeAlarmType_AudibleSound_VersionId = 17937,
    ExclusiveRateOfChangeAlarmType_Unsuppress = 17938,
    ExclusiveRateOfChangeAlarmType_RemoveFromService = 17939,
    ExclusiveRateOfChangeAlarmType_PlaceInService = 17940,
    WriterGroupType_Diagnostics_LiveValues_SecurityTokenID = 17941,
    DiscreteAlarmType_AudibleSound_ListId = 17942,
    DiscreteAlarmType_AudibleSound_AgencyId = 17943,
    DiscreteAlarmType_AudibleSound_VersionId = 17944,
    DiscreteAlarmType_Unsuppress = 17945,
    DiscreteAlarmType_RemoveFromService = 17946,
    DiscreteAlarmType_PlaceInService = 17947,
    WriterGroupType_Diagnostics_LiveValues_SecurityTokenID_DiagnosticsLevel = 17948,
    OffNormalAlarmType_AudibleSound_ListId = 17949,
    OffNormalAlarmType_AudibleSound_AgencyId = 17950,
    OffNormalAlarmType_AudibleSound_VersionId = 17951,
    OffNormalAlarmType_Unsuppress = 17952,
    OffNormalAlarmType_RemoveFromService = 17953,
    OffNormalAlarmType_PlaceInService = 17954,
    WriterGroupType_Diagnostics_LiveValues_TimeToNextTokenID = 17955,
    SystemOffNormalAlarmType_AudibleSound_ListId = 17956,
    SystemOffNormalAlarmType_AudibleSound_AgencyId = 17957,
    SystemOffNormalAlarmType_AudibleSound_VersionId = 17958,
    SystemOffNormalAlarmType_Unsuppress = 17959,
    SystemOffNormalAlarmType_RemoveFromService = 17960,
    SystemOffNormalAlarmType_PlaceInService = 17961,
    WriterGroupType_Diagnostics_LiveValues_TimeToNextTokenID_DiagnosticsLevel = 17962,
    TripAlarmType_AudibleSound_ListId = 17963,
    TripAlarmType_AudibleSound_AgencyId = 17964,
    TripAlarmType_AudibleSound_VersionId = 17965,
    TripAlarmType_Unsuppress = 17966,
    TripAlarmType_RemoveFromService = 17967,
    TripAlarmType_PlaceInService = 17968,
    WriterGroupType_AddDataSetWriter = 17969,
    CertificateExpirationAlarmType_AudibleSound_ListId = 17970,
    CertificateExpirationAlarmType_AudibleSound_AgencyId = 17971,
    CertificateExpirationAlarmType_AudibleSound_VersionId = 17972,
    CertificateExpirationAlarmType_Unsuppress = 17973,
    CertificateExpirationAlarmType_RemoveFromService = 17974,
    CertificateExpirationAlarmType_PlaceInService = 17975,
    WriterGroupType_AddDataSetWriter_InputArguments = 17976,
    DiscrepancyAlarmType_AudibleSound_ListId = 17977,
    DiscrepancyAlarmType_AudibleSound_AgencyId = 17978,
    DiscrepancyAlarmType_AudibleSound_VersionId = 17979,
    DiscrepancyAlarmType_Unsuppress = 17980,
    DiscrepancyAlarmType_RemoveFromService = 17981,
    DiscrepancyAlarmType_PlaceInService = 17982,
    HasEffectEnable = 17983,
    HasEffectSuppressed = 17984,
    HasEffectUnsuppressed = 17985,
    AudioVariableType = 17986,
    WriterGroupType_AddDataSetWriter_OutputArguments = 17987,
    AudioVariableType_ListId = 17988,
    AudioVariableType_AgencyId = 17989,
    AudioVariableType_VersionId = 17990,
    AlarmMetricsType_StartTime = 17991,
    WriterGroupType_RemoveDataSetWriter = 17992,
    WriterGroupType_RemoveDataSetWriter_InputArguments = 17993,
    PubSubGroupTypeAddWriterrMethodType = 17994,
    PubSubGroupTypeAddWriterrMethodType_InputArguments = 17995,
    PubSubGroupTypeAddWriterrMethodType_OutputArguments = 17996,
    WriterGroupTransportType = 17997,
    WriterGroupMessageType = 17998,
    ReaderGroupType = 17999,
    ReaderGroupType_SecurityMode = 18000,
    KeyCredentialConfigurationType = 18001,
    ReaderGroupType_SecurityGroupId = 18002,
    ReaderGroupType_SecurityKeyServices = 18003,
    KeyCredentialConfigurationType_EndpointUrls = 18004,
    KeyCredentialConfigurationType_ServiceStatus = 18005,
    KeyCredentialConfigurationType_UpdateCredential = 18006,
    KeyCredentialConfigurationType_UpdateCredential_InputArguments = 18007,
    KeyCredentialConfigurationType_DeleteCredential = 18008,
    KeyCredentialUpdateMethodType = 18009,
    KeyCredentialUpdateMethodType_InputArguments = 18010,
    KeyCredentialAuditEventType = 18011,
    KeyCredentialAuditEventType_EventId = 18012,
    KeyCredentialAuditEventType_EventType = 18013,
    KeyCredentialAuditEventType_SourceNode = 18014,
    KeyCredentialAuditEventType_SourceName = 18015,
    KeyCredentialAuditEventType_Time = 18016,
    KeyCredentialAuditEventType_ReceiveTime = 18017,
    KeyCredentialAuditEventType_LocalTime = 18018,
    KeyCredentialAuditEventType_Message = 18019,
    KeyCredentialAuditEventType_Severity = 18020,
    KeyCredentialAuditEventType_ActionTimeStamp = 18021,
    KeyCredentialAuditEventType_Status = 18022,
    KeyCredentialAuditEventType_ServerId = 18023,
    KeyCredentialAuditEventType_ClientAuditEntryId = 18024,
    KeyCredentialAuditEventType_ClientUserId = 18025,
    KeyCredentialAuditEventType_MethodId = 18026,
    KeyCredentialAuditEventType_InputArguments = 18027,
    KeyCredentialAuditEventType_ResourceUri = 18028,
    KeyCredentialUpdatedAuditEventType = 18029,
    KeyCredentialUpdatedAuditEventType_EventId = 18030,
    KeyCredentialUpdatedAuditEventType_EventType = 18031,
    KeyCredentialUpdatedAuditEventType_SourceNode = 18032,
    KeyCredentialUpdatedAuditEventType_SourceName = 18033,
    KeyCredentialUpdatedAuditEventType_Time = 18034,
    KeyCredentialUpdatedAuditEventType_ReceiveTime = 18035,
    KeyCredentialUpdatedAuditEventType_LocalTime = 18036,
    KeyCredentialUpdatedAuditEventType_Message = 18037,
    KeyCredentialUpdatedAuditEventType_Severity = 18038,
    KeyCredentialUpdatedAuditEventType_ActionTimeStamp = 18039,
    KeyCredentialUpdatedAuditEventType_Status = 18040,
    KeyCredentialUpdatedAuditEventType_ServerId = 18041,
    KeyCredentialUpdatedAuditEventType_ClientAuditEntryId = 18042,
    KeyCredentialUpdatedAuditEventType_ClientUserId = 18043,
    KeyCredentialUpdatedAuditEventType_MethodId = 18044,
    KeyCredentialUpdatedAuditEventType_InputArguments = 18045,
    KeyCredentialUpdatedAuditEventType_ResourceUri = 18046,
    KeyCredentialDeletedAuditEventType = 18047,
    KeyCredentialDeletedAuditEventType_EventId = 18048,
    KeyCredentialDeletedAuditEventType_EventType = 18049,
    KeyCredentialDeletedAuditEventType_SourceNode = 18050,
    KeyCredentialDeletedAuditEventType_SourceName = 18051,
    KeyCredentialDeletedAuditEventType_Time = 18052,
    KeyCredentialDeletedAuditEventType_ReceiveTime = 18053,
    KeyCredentialDeletedAuditEventType_LocalTime = 18054,
    KeyCredentialDeletedAuditEventType_Message = 18055,
    KeyCredentialDeletedAuditEventType_Severity = 18056,
    KeyCredentialDeletedAuditEventType_ActionTimeStamp = 18057,
    KeyCredentialDeletedAuditEventType_Status = 18058,
    KeyCredentialDeletedAuditEventType_ServerId = 18059,
    KeyCredentialDeletedAuditEventType_ClientAuditEntryId = 18060,
    KeyCredentialDeletedAuditEventType_ClientUserId = 18061,
    KeyCredentialDeletedAuditEventType_MethodId = 18062,
    KeyCredentialDeletedAuditEventType_InputArguments = 18063,
    KeyCredentialDeletedAuditEventType_ResourceUri = 18064,
    ReaderGroupType_MaxNetworkMessageSize = 18065,
    ReaderGroupType_Status = 18067,
    ReaderGroupType_Status_State = 18068,
    KeyCredentialConfigurationType_ResourceUri = 18069,
    AuthorizationServiceConfigurationType_ServiceUri = 18072,
    AuthorizationServiceConfigurationType_IssuerEndpointUrl = 18073,
    ReaderGroupType_Status_Enable = 18074,
    ReaderGroupType_Status_Disable = 18075,
    ReaderGroupType_DataSetReaderName_Placeholder = 18076,
    ReaderGroupType_DataSetReaderName_Placeholder_PublisherId = 18077,
    ReaderGroupType_DataSetReaderName_Placeholder_WriterGroupId = 18078,
    ReaderGroupType_DataSetReaderName_Placeholder_DataSetWriterId = 18079,
    ReaderGroupType_DataSetReaderName_Placeholder_DataSetMetaData = 18080,
    ReaderGroupType_DataSetReaderName_Placeholder_DataSetFieldContentMask = 18081,
    ReaderGroupType_DataSetReaderName_Placeholder_MessageReceiveTimeout = 18082,
    ReaderGroupType_DataSetReaderName_Placeholder_SecurityMode = 18083,
    ReaderGroupType_DataSetReaderName_Placeholder_SecurityGroupId = 18084,
    ReaderGroupType_DataSetReaderName_Placeholder_SecurityKeyServices = 18085,
    ReaderGroupType_DataSetReaderName_Placeholder_TransportSettings = 18086,
    ReaderGroupType_DataSetReaderName_Placeholder_MessageSettings = 18087,
    ReaderGroupType_DataSetReaderName_Placeholder_Status = 18088,
    ReaderGroupType_DataSetReaderName_Placeholder_Status_State = 18089,
    ReaderGroupType_DataSetReaderName_Placeholder_Status_Enable = 18090,
    ReaderGroupType_DataSetReaderName_Placeholder_Status_Disable = 18091,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics = 18092,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_DiagnosticsLevel = 18093,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalInformation = 18094,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalInformation_Active = 18095,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalInformation_Classification = 18096,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 18097,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 18098,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalError = 18099,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalError_Active = 18100,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalError_Classification = 18101,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 18102,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 18103,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Reset = 18104,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_SubError = 18105,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters = 18106,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateError = 18107,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateError_Active = 18108,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateError_Classification = 18109,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 18110,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 18111,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 18112,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 18113,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 18114,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 18115,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 18116,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 18117,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 18118,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 18119,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 18120,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 18121,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 18122,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 18123,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 18124,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 18125,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 18126,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StatePausedByParent = 18127,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 18128,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 18129,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 18130,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 18131,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 18132,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 18133,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 18134,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 18135,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 18136,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues = 18137,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_FailedDataSetMessages = 18138,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Active = 18139,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Classification = 18140,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_DiagnosticsLevel = 18141,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_TimeFirstChange = 18142,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_DecryptionErrors = 18143,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_DecryptionErrors_Active = 18144,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_DecryptionErrors_Classification = 18145,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_DecryptionErrors_DiagnosticsLevel = 18146,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_Counters_DecryptionErrors_TimeFirstChange = 18147,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber = 18148,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 18149,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_StatusCode = 18150,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_StatusCode_DiagnosticsLevel = 18151,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_MajorVersion = 18152,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_MajorVersion_DiagnosticsLevel = 18153,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_MinorVersion = 18154,
    KeyCredentialConfiguration = 18155,
    KeyCredentialConfiguration_ServiceName_Placeholder = 18156,
    KeyCredentialConfiguration_ServiceName_Placeholder_ResourceUri = 18157,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_MinorVersion_DiagnosticsLevel = 18158,
    KeyCredentialConfiguration_ServiceName_Placeholder_EndpointUrls = 18159,
    KeyCredentialConfiguration_ServiceName_Placeholder_ServiceStatus = 18160,
    KeyCredentialConfiguration_ServiceName_Placeholder_UpdateCredential = 18161,
    KeyCredentialConfiguration_ServiceName_Placeholder_UpdateCredential_InputArguments = 18162,
    KeyCredentialConfiguration_ServiceName_Placeholder_DeleteCredential = 18163,
    KeyCredentialConfiguration_ServiceName_Placeholder_ProfileUri = 18164,
    KeyCredentialConfigurationType_ProfileUri = 18165,
    OpcUa_BinarySchema_DataTypeDefinition = 18178,
    OpcUa_BinarySchema_DataTypeDefinition_DataTypeVersion = 18179,
    OpcUa_BinarySchema_DataTypeDefinition_DictionaryFragment = 18180,
    OpcUa_BinarySchema_StructureField = 18181,
    OpcUa_BinarySchema_StructureField_DataTypeVersion = 18182,
    OpcUa_BinarySchema_StructureField_DictionaryFragment = 18183,
    OpcUa_BinarySchema_StructureDefinition = 18184,
    OpcUa_BinarySchema_StructureDefinition_DataTypeVersion = 18185,
    OpcUa_BinarySchema_StructureDefinition_DictionaryFragment = 18186,
    OpcUa_BinarySchema_EnumDefinition = 18187,
    OpcUa_BinarySchema_EnumDefinition_DataTypeVersion = 18188,
    OpcUa_BinarySchema_EnumDefinition_DictionaryFragment = 18189,
    AlarmConditionType_LatchedState = 18190,
    AlarmConditionType_LatchedState_Id = 18191,
    AlarmConditionType_LatchedState_Name = 18192,
    AlarmConditionType_LatchedState_Number = 18193,
    AlarmConditionType_LatchedState_EffectiveDisplayName = 18194,
    AlarmConditionType_LatchedState_TransitionTime = 18195,
    AlarmConditionType_LatchedState_EffectiveTransitionTime = 18196,
    AlarmConditionType_LatchedState_TrueState = 18197,
    AlarmConditionType_LatchedState_FalseState = 18198,
    AlarmConditionType_Reset = 18199,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AudibleSound_ListId = 18200,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AudibleSound_AgencyId = 18201,
    AlarmGroupType_AlarmConditionInstance_Placeholder_AudibleSound_VersionId = 18202,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState = 18203,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState_Id = 18204,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState_Name = 18205,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState_Number = 18206,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState_EffectiveDisplayName = 18207,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState_TransitionTime = 18208,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState_EffectiveTransitionTime = 18209,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState_TrueState = 18210,
    AlarmGroupType_AlarmConditionInstance_Placeholder_LatchedState_FalseState = 18211,
    AlarmGroupType_AlarmConditionInstance_Placeholder_Reset = 18212,
    LimitAlarmType_LatchedState = 18213,
    LimitAlarmType_LatchedState_Id = 18214,
    LimitAlarmType_LatchedState_Name = 18215,
    LimitAlarmType_LatchedState_Number = 18216,
    LimitAlarmType_LatchedState_EffectiveDisplayName = 18217,
    LimitAlarmType_LatchedState_TransitionTime = 18218,
    LimitAlarmType_LatchedState_EffectiveTransitionTime = 18219,
    LimitAlarmType_LatchedState_TrueState = 18220,
    LimitAlarmType_LatchedState_FalseState = 18221,
    LimitAlarmType_Reset = 18222,
    ExclusiveLimitAlarmType_LatchedState = 18223,
    ExclusiveLimitAlarmType_LatchedState_Id = 18224,
    ExclusiveLimitAlarmType_LatchedState_Name = 18225,
    ExclusiveLimitAlarmType_LatchedState_Number = 18226,
    ExclusiveLimitAlarmType_LatchedState_EffectiveDisplayName = 18227,
    ExclusiveLimitAlarmType_LatchedState_TransitionTime = 18228,
    ExclusiveLimitAlarmType_LatchedState_EffectiveTransitionTime = 18229,
    ExclusiveLimitAlarmType_LatchedState_TrueState = 18230,
    ExclusiveLimitAlarmType_LatchedState_FalseState = 18231,
    ExclusiveLimitAlarmType_Reset = 18232,
    NonExclusiveLimitAlarmType_LatchedState = 18233,
    NonExclusiveLimitAlarmType_LatchedState_Id = 18234,
    NonExclusiveLimitAlarmType_LatchedState_Name = 18235,
    NonExclusiveLimitAlarmType_LatchedState_Number = 18236,
    NonExclusiveLimitAlarmType_LatchedState_EffectiveDisplayName = 18237,
    NonExclusiveLimitAlarmType_LatchedState_TransitionTime = 18238,
    NonExclusiveLimitAlarmType_LatchedState_EffectiveTransitionTime = 18239,
    NonExclusiveLimitAlarmType_LatchedState_TrueState = 18240,
    NonExclusiveLimitAlarmType_LatchedState_FalseState = 18241,
    NonExclusiveLimitAlarmType_Reset = 18242,
    NonExclusiveLevelAlarmType_AudibleSound_ListId = 18243,
    NonExclusiveLevelAlarmType_AudibleSound_AgencyId = 18244,
    NonExclusiveLevelAlarmType_AudibleSound_VersionId = 18245,
    NonExclusiveLevelAlarmType_LatchedState = 18246,
    NonExclusiveLevelAlarmType_LatchedState_Id = 18247,
    NonExclusiveLevelAlarmType_LatchedState_Name = 18248,
    NonExclusiveLevelAlarmType_LatchedState_Number = 18249,
    NonExclusiveLevelAlarmType_LatchedState_EffectiveDisplayName = 18250,
    NonExclusiveLevelAlarmType_LatchedState_TransitionTime = 18251,
    NonExclusiveLevelAlarmType_LatchedState_EffectiveTransitionTime = 18252,
    NonExclusiveLevelAlarmType_LatchedState_TrueState = 18253,
    NonExclusiveLevelAlarmType_LatchedState_FalseState = 18254,
    NonExclusiveLevelAlarmType_Unsuppress = 18255,
    NonExclusiveLevelAlarmType_Reset = 18256,
    ExclusiveLevelAlarmType_LatchedState = 18257,
    ExclusiveLevelAlarmType_LatchedState_Id = 18258,
    ExclusiveLevelAlarmType_LatchedState_Name = 18259,
    ExclusiveLevelAlarmType_LatchedState_Number = 18260,
    ExclusiveLevelAlarmType_LatchedState_EffectiveDisplayName = 18261,
    ExclusiveLevelAlarmType_LatchedState_TransitionTime = 18262,
    ExclusiveLevelAlarmType_LatchedState_EffectiveTransitionTime = 18263,
    ExclusiveLevelAlarmType_LatchedState_TrueState = 18264,
    ExclusiveLevelAlarmType_LatchedState_FalseState = 18265,
    ExclusiveLevelAlarmType_Reset = 18266,
    NonExclusiveDeviationAlarmType_LatchedState = 18267,
    NonExclusiveDeviationAlarmType_LatchedState_Id = 18268,
    NonExclusiveDeviationAlarmType_LatchedState_Name = 18269,
    NonExclusiveDeviationAlarmType_LatchedState_Number = 18270,
    NonExclusiveDeviationAlarmType_LatchedState_EffectiveDisplayName = 18271,
    NonExclusiveDeviationAlarmType_LatchedState_TransitionTime = 18272,
    NonExclusiveDeviationAlarmType_LatchedState_EffectiveTransitionTime = 18273,
    NonExclusiveDeviationAlarmType_LatchedState_TrueState = 18274,
    NonExclusiveDeviationAlarmType_LatchedState_FalseState = 18275,
    NonExclusiveDeviationAlarmType_Reset = 18276,
    NonExclusiveRateOfChangeAlarmType_LatchedState = 18277,
    NonExclusiveRateOfChangeAlarmType_LatchedState_Id = 18278,
    NonExclusiveRateOfChangeAlarmType_LatchedState_Name = 18279,
    NonExclusiveRateOfChangeAlarmType_LatchedState_Number = 18280,
    NonExclusiveRateOfChangeAlarmType_LatchedState_EffectiveDisplayName = 18281,
    NonExclusiveRateOfChangeAlarmType_LatchedState_TransitionTime = 18282,
    NonExclusiveRateOfChangeAlarmType_LatchedState_EffectiveTransitionTime = 18283,
    NonExclusiveRateOfChangeAlarmType_LatchedState_TrueState = 18284,
    NonExclusiveRateOfChangeAlarmType_LatchedState_FalseState = 18285,
    NonExclusiveRateOfChangeAlarmType_Reset = 18286,
    ExclusiveDeviationAlarmType_LatchedState = 18287,
    ExclusiveDeviationAlarmType_LatchedState_Id = 18288,
    ExclusiveDeviationAlarmType_LatchedState_Name = 18289,
    ExclusiveDeviationAlarmType_LatchedState_Number = 18290,
    ExclusiveDeviationAlarmType_LatchedState_EffectiveDisplayName = 18291,
    ExclusiveDeviationAlarmType_LatchedState_TransitionTime = 18292,
    ExclusiveDeviationAlarmType_LatchedState_EffectiveTransitionTime = 18293,
    ExclusiveDeviationAlarmType_LatchedState_TrueState = 18294,
    ExclusiveDeviationAlarmType_LatchedState_FalseState = 18295,
    ExclusiveDeviationAlarmType_Reset = 18296,
    ExclusiveRateOfChangeAlarmType_LatchedState = 18297,
    ExclusiveRateOfChangeAlarmType_LatchedState_Id = 18298,
    ExclusiveRateOfChangeAlarmType_LatchedState_Name = 18299,
    ExclusiveRateOfChangeAlarmType_LatchedState_Number = 18300,
    ExclusiveRateOfChangeAlarmType_LatchedState_EffectiveDisplayName = 18301,
    ExclusiveRateOfChangeAlarmType_LatchedState_TransitionTime = 18302,
    ExclusiveRateOfChangeAlarmType_LatchedState_EffectiveTransitionTime = 18303,
    ExclusiveRateOfChangeAlarmType_LatchedState_TrueState = 18304,
    ExclusiveRateOfChangeAlarmType_LatchedState_FalseState = 18305,
    ExclusiveRateOfChangeAlarmType_Reset = 18306,
    DiscreteAlarmType_LatchedState = 18307,
    DiscreteAlarmType_LatchedState_Id = 18308,
    DiscreteAlarmType_LatchedState_Name = 18309,
    DiscreteAlarmType_LatchedState_Number = 18310,
    DiscreteAlarmType_LatchedState_EffectiveDisplayName = 18311,
    DiscreteAlarmType_LatchedState_TransitionTime = 18312,
    DiscreteAlarmType_LatchedState_EffectiveTransitionTime = 18313,
    DiscreteAlarmType_LatchedState_TrueState = 18314,
    DiscreteAlarmType_LatchedState_FalseState = 18315,
    DiscreteAlarmType_Reset = 18316,
    OffNormalAlarmType_LatchedState = 18317,
    OffNormalAlarmType_LatchedState_Id = 18318,
    OffNormalAlarmType_LatchedState_Name = 18319,
    OffNormalAlarmType_LatchedState_Number = 18320,
    OffNormalAlarmType_LatchedState_EffectiveDisplayName = 18321,
    OffNormalAlarmType_LatchedState_TransitionTime = 18322,
    OffNormalAlarmType_LatchedState_EffectiveTransitionTime = 18323,
    OffNormalAlarmType_LatchedState_TrueState = 18324,
    OffNormalAlarmType_LatchedState_FalseState = 18325,
    OffNormalAlarmType_Reset = 18326,
    SystemOffNormalAlarmType_LatchedState = 18327,
    SystemOffNormalAlarmType_LatchedState_Id = 18328,
    SystemOffNormalAlarmType_LatchedState_Name = 18329,
    SystemOffNormalAlarmType_LatchedState_Number = 18330,
    SystemOffNormalAlarmType_LatchedState_EffectiveDisplayName = 18331,
    SystemOffNormalAlarmType_LatchedState_TransitionTime = 18332,
    SystemOffNormalAlarmType_LatchedState_EffectiveTransitionTime = 18333,
    SystemOffNormalAlarmType_LatchedState_TrueState = 18334,
    SystemOffNormalAlarmType_LatchedState_FalseState = 18335,
    SystemOffNormalAlarmType_Reset = 18336,
    TripAlarmType_LatchedState = 18337,
    TripAlarmType_LatchedState_Id = 18338,
    TripAlarmType_LatchedState_Name = 18339,
    TripAlarmType_LatchedState_Number = 18340,
    TripAlarmType_LatchedState_EffectiveDisplayName = 18341,
    TripAlarmType_LatchedState_TransitionTime = 18342,
    TripAlarmType_LatchedState_EffectiveTransitionTime = 18343,
    TripAlarmType_LatchedState_TrueState = 18344,
    TripAlarmType_LatchedState_FalseState = 18345,
    TripAlarmType_Reset = 18346,
    InstrumentDiagnosticAlarmType = 18347,
    InstrumentDiagnosticAlarmType_EventId = 18348,
    InstrumentDiagnosticAlarmType_EventType = 18349,
    InstrumentDiagnosticAlarmType_SourceNode = 18350,
    InstrumentDiagnosticAlarmType_SourceName = 18351,
    InstrumentDiagnosticAlarmType_Time = 18352,
    InstrumentDiagnosticAlarmType_ReceiveTime = 18353,
    InstrumentDiagnosticAlarmType_LocalTime = 18354,
    InstrumentDiagnosticAlarmType_Message = 18355,
    InstrumentDiagnosticAlarmType_Severity = 18356,
    InstrumentDiagnosticAlarmType_ConditionClassId = 18357,
    InstrumentDiagnosticAlarmType_ConditionClassName = 18358,
    InstrumentDiagnosticAlarmType_ConditionSubClassId = 18359,
    InstrumentDiagnosticAlarmType_ConditionSubClassName = 18360,
    InstrumentDiagnosticAlarmType_ConditionName = 18361,
    InstrumentDiagnosticAlarmType_BranchId = 18362,
    InstrumentDiagnosticAlarmType_Retain = 18363,
    InstrumentDiagnosticAlarmType_EnabledState = 18364,
    InstrumentDiagnosticAlarmType_EnabledState_Id = 18365,
    InstrumentDiagnosticAlarmType_EnabledState_Name = 18366,
    InstrumentDiagnosticAlarmType_EnabledState_Number = 18367,
    InstrumentDiagnosticAlarmType_EnabledState_EffectiveDisplayName = 18368,
    InstrumentDiagnosticAlarmType_EnabledState_TransitionTime = 18369,
    InstrumentDiagnosticAlarmType_EnabledState_EffectiveTransitionTime = 18370,
    InstrumentDiagnosticAlarmType_EnabledState_TrueState = 18371,
    InstrumentDiagnosticAlarmType_EnabledState_FalseState = 18372,
    InstrumentDiagnosticAlarmType_Quality = 18373,
    InstrumentDiagnosticAlarmType_Quality_SourceTimestamp = 18374,
    InstrumentDiagnosticAlarmType_LastSeverity = 18375,
    InstrumentDiagnosticAlarmType_LastSeverity_SourceTimestamp = 18376,
    InstrumentDiagnosticAlarmType_Comment = 18377,
    InstrumentDiagnosticAlarmType_Comment_SourceTimestamp = 18378,
    InstrumentDiagnosticAlarmType_ClientUserId = 18379,
    InstrumentDiagnosticAlarmType_Disable = 18380,
    InstrumentDiagnosticAlarmType_Enable = 18381,
    InstrumentDiagnosticAlarmType_AddComment = 18382,
    InstrumentDiagnosticAlarmType_AddComment_InputArguments = 18383,
    InstrumentDiagnosticAlarmType_ConditionRefresh = 18384,
    InstrumentDiagnosticAlarmType_ConditionRefresh_InputArguments = 18385,
    InstrumentDiagnosticAlarmType_ConditionRefresh2 = 18386,
    InstrumentDiagnosticAlarmType_ConditionRefresh2_InputArguments = 18387,
    InstrumentDiagnosticAlarmType_AckedState = 18388,
    InstrumentDiagnosticAlarmType_AckedState_Id = 18389,
    InstrumentDiagnosticAlarmType_AckedState_Name = 18390,
    InstrumentDiagnosticAlarmType_AckedState_Number = 18391,
    InstrumentDiagnosticAlarmType_AckedState_EffectiveDisplayName = 18392,
    InstrumentDiagnosticAlarmType_AckedState_TransitionTime = 18393,
    InstrumentDiagnosticAlarmType_AckedState_EffectiveTransitionTime = 18394,
    InstrumentDiagnosticAlarmType_AckedState_TrueState = 18395,
    InstrumentDiagnosticAlarmType_AckedState_FalseState = 18396,
    InstrumentDiagnosticAlarmType_ConfirmedState = 18397,
    InstrumentDiagnosticAlarmType_ConfirmedState_Id = 18398,
    InstrumentDiagnosticAlarmType_ConfirmedState_Name = 18399,
    InstrumentDiagnosticAlarmType_ConfirmedState_Number = 18400,
    InstrumentDiagnosticAlarmType_ConfirmedState_EffectiveDisplayName = 18401,
    InstrumentDiagnosticAlarmType_ConfirmedState_TransitionTime = 18402,
    InstrumentDiagnosticAlarmType_ConfirmedState_EffectiveTransitionTime = 18403,
    InstrumentDiagnosticAlarmType_ConfirmedState_TrueState = 18404,
    InstrumentDiagnosticAlarmType_ConfirmedState_FalseState = 18405,
    InstrumentDiagnosticAlarmType_Acknowledge = 18406,
    InstrumentDiagnosticAlarmType_Acknowledge_InputArguments = 18407,
    InstrumentDiagnosticAlarmType_Confirm = 18408,
    InstrumentDiagnosticAlarmType_Confirm_InputArguments = 18409,
    InstrumentDiagnosticAlarmType_ActiveState = 18410,
    InstrumentDiagnosticAlarmType_ActiveState_Id = 18411,
    InstrumentDiagnosticAlarmType_ActiveState_Name = 18412,
    InstrumentDiagnosticAlarmType_ActiveState_Number = 18413,
    InstrumentDiagnosticAlarmType_ActiveState_EffectiveDisplayName = 18414,
    InstrumentDiagnosticAlarmType_ActiveState_TransitionTime = 18415,
    InstrumentDiagnosticAlarmType_ActiveState_EffectiveTransitionTime = 18416,
    InstrumentDiagnosticAlarmType_ActiveState_TrueState = 18417,
    InstrumentDiagnosticAlarmType_ActiveState_FalseState = 18418,
    InstrumentDiagnosticAlarmType_InputNode = 18419,
    InstrumentDiagnosticAlarmType_SuppressedState = 18420,
    InstrumentDiagnosticAlarmType_SuppressedState_Id = 18421,
    InstrumentDiagnosticAlarmType_SuppressedState_Name = 18422,
    InstrumentDiagnosticAlarmType_SuppressedState_Number = 18423,
    InstrumentDiagnosticAlarmType_SuppressedState_EffectiveDisplayName = 18424,
    InstrumentDiagnosticAlarmType_SuppressedState_TransitionTime = 18425,
    InstrumentDiagnosticAlarmType_SuppressedState_EffectiveTransitionTime = 18426,
    InstrumentDiagnosticAlarmType_SuppressedState_TrueState = 18427,
    InstrumentDiagnosticAlarmType_SuppressedState_FalseState = 18428,
    InstrumentDiagnosticAlarmType_OutOfServiceState = 18429,
    InstrumentDiagnosticAlarmType_OutOfServiceState_Id = 18430,
    InstrumentDiagnosticAlarmType_OutOfServiceState_Name = 18431,
    InstrumentDiagnosticAlarmType_OutOfServiceState_Number = 18432,
    InstrumentDiagnosticAlarmType_OutOfServiceState_EffectiveDisplayName = 18433,
    InstrumentDiagnosticAlarmType_OutOfServiceState_TransitionTime = 18434,
    InstrumentDiagnosticAlarmType_OutOfServiceState_EffectiveTransitionTime = 18435,
    InstrumentDiagnosticAlarmType_OutOfServiceState_TrueState = 18436,
    InstrumentDiagnosticAlarmType_OutOfServiceState_FalseState = 18437,
    InstrumentDiagnosticAlarmType_ShelvingState = 18438,
    InstrumentDiagnosticAlarmType_ShelvingState_CurrentState = 18439,
    InstrumentDiagnosticAlarmType_ShelvingState_CurrentState_Id = 18440,
    InstrumentDiagnosticAlarmType_ShelvingState_CurrentState_Name = 18441,
    InstrumentDiagnosticAlarmType_ShelvingState_CurrentState_Number = 18442,
    InstrumentDiagnosticAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 18443,
    InstrumentDiagnosticAlarmType_ShelvingState_LastTransition = 18444,
    InstrumentDiagnosticAlarmType_ShelvingState_LastTransition_Id = 18445,
    InstrumentDiagnosticAlarmType_ShelvingState_LastTransition_Name = 18446,
    InstrumentDiagnosticAlarmType_ShelvingState_LastTransition_Number = 18447,
    InstrumentDiagnosticAlarmType_ShelvingState_LastTransition_TransitionTime = 18448,
    InstrumentDiagnosticAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 18449,
    InstrumentDiagnosticAlarmType_ShelvingState_AvailableStates = 18450,
    InstrumentDiagnosticAlarmType_ShelvingState_AvailableTransitions = 18451,
    InstrumentDiagnosticAlarmType_ShelvingState_UnshelveTime = 18452,
    InstrumentDiagnosticAlarmType_ShelvingState_TimedShelve = 18453,
    InstrumentDiagnosticAlarmType_ShelvingState_TimedShelve_InputArguments = 18454,
    InstrumentDiagnosticAlarmType_ShelvingState_Unshelve = 18455,
    InstrumentDiagnosticAlarmType_ShelvingState_OneShotShelve = 18456,
    InstrumentDiagnosticAlarmType_SuppressedOrShelved = 18457,
    InstrumentDiagnosticAlarmType_MaxTimeShelved = 18458,
    InstrumentDiagnosticAlarmType_AudibleEnabled = 18459,
    InstrumentDiagnosticAlarmType_AudibleSound = 18460,
    InstrumentDiagnosticAlarmType_AudibleSound_ListId = 18461,
    InstrumentDiagnosticAlarmType_AudibleSound_AgencyId = 18462,
    InstrumentDiagnosticAlarmType_AudibleSound_VersionId = 18463,
    InstrumentDiagnosticAlarmType_SilenceState = 18464,
    InstrumentDiagnosticAlarmType_SilenceState_Id = 18465,
    InstrumentDiagnosticAlarmType_SilenceState_Name = 18466,
    InstrumentDiagnosticAlarmType_SilenceState_Number = 18467,
    InstrumentDiagnosticAlarmType_SilenceState_EffectiveDisplayName = 18468,
    InstrumentDiagnosticAlarmType_SilenceState_TransitionTime = 18469,
    InstrumentDiagnosticAlarmType_SilenceState_EffectiveTransitionTime = 18470,
    InstrumentDiagnosticAlarmType_SilenceState_TrueState = 18471,
    InstrumentDiagnosticAlarmType_SilenceState_FalseState = 18472,
    InstrumentDiagnosticAlarmType_OnDelay = 18473,
    InstrumentDiagnosticAlarmType_OffDelay = 18474,
    InstrumentDiagnosticAlarmType_FirstInGroupFlag = 18475,
    InstrumentDiagnosticAlarmType_FirstInGroup = 18476,
    InstrumentDiagnosticAlarmType_LatchedState = 18477,
    InstrumentDiagnosticAlarmType_LatchedState_Id = 18478,
    InstrumentDiagnosticAlarmType_LatchedState_Name = 18479,
    InstrumentDiagnosticAlarmType_LatchedState_Number = 18480,
    InstrumentDiagnosticAlarmType_LatchedState_EffectiveDisplayName = 18481,
    InstrumentDiagnosticAlarmType_LatchedState_TransitionTime = 18482,
    InstrumentDiagnosticAlarmType_LatchedState_EffectiveTransitionTime = 18483,
    InstrumentDiagnosticAlarmType_LatchedState_TrueState = 18484,
    InstrumentDiagnosticAlarmType_LatchedState_FalseState = 18485,
    InstrumentDiagnosticAlarmType_AlarmGroup_Placeholder = 18486,
    InstrumentDiagnosticAlarmType_ReAlarmTime = 18487,
    InstrumentDiagnosticAlarmType_ReAlarmRepeatCount = 18488,
    InstrumentDiagnosticAlarmType_Silence = 18489,
    InstrumentDiagnosticAlarmType_Suppress = 18490,
    InstrumentDiagnosticAlarmType_Unsuppress = 18491,
    InstrumentDiagnosticAlarmType_RemoveFromService = 18492,
    InstrumentDiagnosticAlarmType_PlaceInService = 18493,
    InstrumentDiagnosticAlarmType_Reset = 18494,
    InstrumentDiagnosticAlarmType_NormalState = 18495,
    SystemDiagnosticAlarmType = 18496,
    SystemDiagnosticAlarmType_EventId = 18497,
    SystemDiagnosticAlarmType_EventType = 18498,
    SystemDiagnosticAlarmType_SourceNode = 18499,
    SystemDiagnosticAlarmType_SourceName = 18500,
    SystemDiagnosticAlarmType_Time = 18501,
    SystemDiagnosticAlarmType_ReceiveTime = 18502,
    SystemDiagnosticAlarmType_LocalTime = 18503,
    SystemDiagnosticAlarmType_Message = 18504,
    SystemDiagnosticAlarmType_Severity = 18505,
    SystemDiagnosticAlarmType_ConditionClassId = 18506,
    SystemDiagnosticAlarmType_ConditionClassName = 18507,
    SystemDiagnosticAlarmType_ConditionSubClassId = 18508,
    SystemDiagnosticAlarmType_ConditionSubClassName = 18509,
    SystemDiagnosticAlarmType_ConditionName = 18510,
    SystemDiagnosticAlarmType_BranchId = 18511,
    SystemDiagnosticAlarmType_Retain = 18512,
    SystemDiagnosticAlarmType_EnabledState = 18513,
    SystemDiagnosticAlarmType_EnabledState_Id = 18514,
    SystemDiagnosticAlarmType_EnabledState_Name = 18515,
    SystemDiagnosticAlarmType_EnabledState_Number = 18516,
    SystemDiagnosticAlarmType_EnabledState_EffectiveDisplayName = 18517,
    SystemDiagnosticAlarmType_EnabledState_TransitionTime = 18518,
    SystemDiagnosticAlarmType_EnabledState_EffectiveTransitionTime = 18519,
    SystemDiagnosticAlarmType_EnabledState_TrueState = 18520,
    SystemDiagnosticAlarmType_EnabledState_FalseState = 18521,
    SystemDiagnosticAlarmType_Quality = 18522,
    SystemDiagnosticAlarmType_Quality_SourceTimestamp = 18523,
    SystemDiagnosticAlarmType_LastSeverity = 18524,
    SystemDiagnosticAlarmType_LastSeverity_SourceTimestamp = 18525,
    SystemDiagnosticAlarmType_Comment = 18526,
    SystemDiagnosticAlarmType_Comment_SourceTimestamp = 18527,
    SystemDiagnosticAlarmType_ClientUserId = 18528,
    SystemDiagnosticAlarmType_Disable = 18529,
    SystemDiagnosticAlarmType_Enable = 18530,
    SystemDiagnosticAlarmType_AddComment = 18531,
    SystemDiagnosticAlarmType_AddComment_InputArguments = 18532,
    SystemDiagnosticAlarmType_ConditionRefresh = 18533,
    SystemDiagnosticAlarmType_ConditionRefresh_InputArguments = 18534,
    SystemDiagnosticAlarmType_ConditionRefresh2 = 18535,
    SystemDiagnosticAlarmType_ConditionRefresh2_InputArguments = 18536,
    SystemDiagnosticAlarmType_AckedState = 18537,
    SystemDiagnosticAlarmType_AckedState_Id = 18538,
    SystemDiagnosticAlarmType_AckedState_Name = 18539,
    SystemDiagnosticAlarmType_AckedState_Number = 18540,
    SystemDiagnosticAlarmType_AckedState_EffectiveDisplayName = 18541,
    SystemDiagnosticAlarmType_AckedState_TransitionTime = 18542,
    SystemDiagnosticAlarmType_AckedState_EffectiveTransitionTime = 18543,
    SystemDiagnosticAlarmType_AckedState_TrueState = 18544,
    SystemDiagnosticAlarmType_AckedState_FalseState = 18545,
    SystemDiagnosticAlarmType_ConfirmedState = 18546,
    SystemDiagnosticAlarmType_ConfirmedState_Id = 18547,
    SystemDiagnosticAlarmType_ConfirmedState_Name = 18548,
    SystemDiagnosticAlarmType_ConfirmedState_Number = 18549,
    SystemDiagnosticAlarmType_ConfirmedState_EffectiveDisplayName = 18550,
    SystemDiagnosticAlarmType_ConfirmedState_TransitionTime = 18551,
    SystemDiagnosticAlarmType_ConfirmedState_EffectiveTransitionTime = 18552,
    SystemDiagnosticAlarmType_ConfirmedState_TrueState = 18553,
    SystemDiagnosticAlarmType_ConfirmedState_FalseState = 18554,
    SystemDiagnosticAlarmType_Acknowledge = 18555,
    SystemDiagnosticAlarmType_Acknowledge_InputArguments = 18556,
    SystemDiagnosticAlarmType_Confirm = 18557,
    SystemDiagnosticAlarmType_Confirm_InputArguments = 18558,
    SystemDiagnosticAlarmType_ActiveState = 18559,
    SystemDiagnosticAlarmType_ActiveState_Id = 18560,
    SystemDiagnosticAlarmType_ActiveState_Name = 18561,
    SystemDiagnosticAlarmType_ActiveState_Number = 18562,
    SystemDiagnosticAlarmType_ActiveState_EffectiveDisplayName = 18563,
    SystemDiagnosticAlarmType_ActiveState_TransitionTime = 18564,
    SystemDiagnosticAlarmType_ActiveState_EffectiveTransitionTime = 18565,
    SystemDiagnosticAlarmType_ActiveState_TrueState = 18566,
    SystemDiagnosticAlarmType_ActiveState_FalseState = 18567,
    SystemDiagnosticAlarmType_InputNode = 18568,
    SystemDiagnosticAlarmType_SuppressedState = 18569,
    SystemDiagnosticAlarmType_SuppressedState_Id = 18570,
    SystemDiagnosticAlarmType_SuppressedState_Name = 18571,
    SystemDiagnosticAlarmType_SuppressedState_Number = 18572,
    SystemDiagnosticAlarmType_SuppressedState_EffectiveDisplayName = 18573,
    SystemDiagnosticAlarmType_SuppressedState_TransitionTime = 18574,
    SystemDiagnosticAlarmType_SuppressedState_EffectiveTransitionTime = 18575,
    SystemDiagnosticAlarmType_SuppressedState_TrueState = 18576,
    SystemDiagnosticAlarmType_SuppressedState_FalseState = 18577,
    SystemDiagnosticAlarmType_OutOfServiceState = 18578,
    SystemDiagnosticAlarmType_OutOfServiceState_Id = 18579,
    SystemDiagnosticAlarmType_OutOfServiceState_Name = 18580,
    SystemDiagnosticAlarmType_OutOfServiceState_Number = 18581,
    SystemDiagnosticAlarmType_OutOfServiceState_EffectiveDisplayName = 18582,
    SystemDiagnosticAlarmType_OutOfServiceState_TransitionTime = 18583,
    SystemDiagnosticAlarmType_OutOfServiceState_EffectiveTransitionTime = 18584,
    SystemDiagnosticAlarmType_OutOfServiceState_TrueState = 18585,
    SystemDiagnosticAlarmType_OutOfServiceState_FalseState = 18586,
    SystemDiagnosticAlarmType_ShelvingState = 18587,
    SystemDiagnosticAlarmType_ShelvingState_CurrentState = 18588,
    SystemDiagnosticAlarmType_ShelvingState_CurrentState_Id = 18589,
    SystemDiagnosticAlarmType_ShelvingState_CurrentState_Name = 18590,
    SystemDiagnosticAlarmType_ShelvingState_CurrentState_Number = 18591,
    SystemDiagnosticAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 18592,
    SystemDiagnosticAlarmType_ShelvingState_LastTransition = 18593,
    SystemDiagnosticAlarmType_ShelvingState_LastTransition_Id = 18594,
    SystemDiagnosticAlarmType_ShelvingState_LastTransition_Name = 18595,
    SystemDiagnosticAlarmType_ShelvingState_LastTransition_Number = 18596,
    SystemDiagnosticAlarmType_ShelvingState_LastTransition_TransitionTime = 18597,
    SystemDiagnosticAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 18598,
    SystemDiagnosticAlarmType_ShelvingState_AvailableStates = 18599,
    SystemDiagnosticAlarmType_ShelvingState_AvailableTransitions = 18600,
    SystemDiagnosticAlarmType_ShelvingState_UnshelveTime = 18601,
    SystemDiagnosticAlarmType_ShelvingState_TimedShelve = 18602,
    SystemDiagnosticAlarmType_ShelvingState_TimedShelve_InputArguments = 18603,
    SystemDiagnosticAlarmType_ShelvingState_Unshelve = 18604,
    SystemDiagnosticAlarmType_ShelvingState_OneShotShelve = 18605,
    SystemDiagnosticAlarmType_SuppressedOrShelved = 18606,
    SystemDiagnosticAlarmType_MaxTimeShelved = 18607,
    SystemDiagnosticAlarmType_AudibleEnabled = 18608,
    SystemDiagnosticAlarmType_AudibleSound = 18609,
    SystemDiagnosticAlarmType_AudibleSound_ListId = 18610,
    SystemDiagnosticAlarmType_AudibleSound_AgencyId = 18611,
    SystemDiagnosticAlarmType_AudibleSound_VersionId = 18612,
    SystemDiagnosticAlarmType_SilenceState = 18613,
    SystemDiagnosticAlarmType_SilenceState_Id = 18614,
    SystemDiagnosticAlarmType_SilenceState_Name = 18615,
    SystemDiagnosticAlarmType_SilenceState_Number = 18616,
    SystemDiagnosticAlarmType_SilenceState_EffectiveDisplayName = 18617,
    SystemDiagnosticAlarmType_SilenceState_TransitionTime = 18618,
    SystemDiagnosticAlarmType_SilenceState_EffectiveTransitionTime = 18619,
    SystemDiagnosticAlarmType_SilenceState_TrueState = 18620,
    SystemDiagnosticAlarmType_SilenceState_FalseState = 18621,
    SystemDiagnosticAlarmType_OnDelay = 18622,
    SystemDiagnosticAlarmType_OffDelay = 18623,
    SystemDiagnosticAlarmType_FirstInGroupFlag = 18624,
    SystemDiagnosticAlarmType_FirstInGroup = 18625,
    SystemDiagnosticAlarmType_LatchedState = 18626,
    SystemDiagnosticAlarmType_LatchedState_Id = 18627,
    SystemDiagnosticAlarmType_LatchedState_Name = 18628,
    SystemDiagnosticAlarmType_LatchedState_Number = 18629,
    SystemDiagnosticAlarmType_LatchedState_EffectiveDisplayName = 18630,
    SystemDiagnosticAlarmType_LatchedState_TransitionTime = 18631,
    SystemDiagnosticAlarmType_LatchedState_EffectiveTransitionTime = 18632,
    SystemDiagnosticAlarmType_LatchedState_TrueState = 18633,
    SystemDiagnosticAlarmType_LatchedState_FalseState = 18634,
    SystemDiagnosticAlarmType_AlarmGroup_Placeholder = 18635,
    SystemDiagnosticAlarmType_ReAlarmTime = 18636,
    SystemDiagnosticAlarmType_ReAlarmRepeatCount = 18637,
    SystemDiagnosticAlarmType_Silence = 18638,
    SystemDiagnosticAlarmType_Suppress = 18639,
    SystemDiagnosticAlarmType_Unsuppress = 18640,
    SystemDiagnosticAlarmType_RemoveFromService = 18641,
    SystemDiagnosticAlarmType_PlaceInService = 18642,
    SystemDiagnosticAlarmType_Reset = 18643,
    SystemDiagnosticAlarmType_NormalState = 18644,
    CertificateExpirationAlarmType_LatchedState = 18645,
    CertificateExpirationAlarmType_LatchedState_Id = 18646,
    CertificateExpirationAlarmType_LatchedState_Name = 18647,
    CertificateExpirationAlarmType_LatchedState_Number = 18648,
    CertificateExpirationAlarmType_LatchedState_EffectiveDisplayName = 18649,
    CertificateExpirationAlarmType_LatchedState_TransitionTime = 18650,
    CertificateExpirationAlarmType_LatchedState_EffectiveTransitionTime = 18651,
    CertificateExpirationAlarmType_LatchedState_TrueState = 18652,
    CertificateExpirationAlarmType_LatchedState_FalseState = 18653,
    CertificateExpirationAlarmType_Reset = 18654,
    DiscrepancyAlarmType_LatchedState = 18655,
    DiscrepancyAlarmType_LatchedState_Id = 18656,
    DiscrepancyAlarmType_LatchedState_Name = 18657,
    DiscrepancyAlarmType_LatchedState_Number = 18658,
    DiscrepancyAlarmType_LatchedState_EffectiveDisplayName = 18659,
    DiscrepancyAlarmType_LatchedState_TransitionTime = 18660,
    DiscrepancyAlarmType_LatchedState_EffectiveTransitionTime = 18661,
    DiscrepancyAlarmType_LatchedState_TrueState = 18662,
    DiscrepancyAlarmType_LatchedState_FalseState = 18663,
    DiscrepancyAlarmType_Reset = 18664,
    StatisticalConditionClassType = 18665,
    AlarmMetricsType_Reset = 18666,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics = 18667,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_DiagnosticsLevel = 18668,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalInformation = 18669,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalInformation_Active = 18670,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalInformation_Classification = 18671,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 18672,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 18673,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalError = 18674,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalError_Active = 18675,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalError_Classification = 18676,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 18677,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 18678,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Reset = 18679,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_SubError = 18680,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters = 18681,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateError = 18682,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateError_Active = 18683,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateError_Classification = 18684,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 18685,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 18686,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 18687,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 18688,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 18689,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 18690,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 18691,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 18692,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 18693,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 18694,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 18695,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 18696,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 18697,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 18698,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 18699,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 18700,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 18701,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent = 18702,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 18703,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 18704,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 18705,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 18706,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 18707,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 18708,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 18709,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 18710,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 18711,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_LiveValues = 18712,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_LiveValues_ResolvedAddress = 18713,
    PublishSubscribeType_ConnectionName_Placeholder_Diagnostics_LiveValues_ResolvedAddress_DiagnosticsLevel = 18714,
    PublishSubscribeType_Diagnostics = 18715,
    PublishSubscribeType_Diagnostics_DiagnosticsLevel = 18716,
    PublishSubscribeType_Diagnostics_TotalInformation = 18717,
    PublishSubscribeType_Diagnostics_TotalInformation_Active = 18718,
    PublishSubscribeType_Diagnostics_TotalInformation_Classification = 18719,
    PublishSubscribeType_Diagnostics_TotalInformation_DiagnosticsLevel = 18720,
    PublishSubscribeType_Diagnostics_TotalInformation_TimeFirstChange = 18721,
    PublishSubscribeType_Diagnostics_TotalError = 18722,
    PublishSubscribeType_Diagnostics_TotalError_Active = 18723,
    PublishSubscribeType_Diagnostics_TotalError_Classification = 18724,
    PublishSubscribeType_Diagnostics_TotalError_DiagnosticsLevel = 18725,
    PublishSubscribeType_Diagnostics_TotalError_TimeFirstChange = 18726,
    PublishSubscribeType_Diagnostics_Reset = 18727,
    PublishSubscribeType_Diagnostics_SubError = 18728,
    PublishSubscribeType_Diagnostics_Counters = 18729,
    PublishSubscribeType_Diagnostics_Counters_StateError = 18730,
    PublishSubscribeType_Diagnostics_Counters_StateError_Active = 18731,
    PublishSubscribeType_Diagnostics_Counters_StateError_Classification = 18732,
    PublishSubscribeType_Diagnostics_Counters_StateError_DiagnosticsLevel = 18733,
    PublishSubscribeType_Diagnostics_Counters_StateError_TimeFirstChange = 18734,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByMethod = 18735,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByMethod_Active = 18736,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByMethod_Classification = 18737,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 18738,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 18739,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByParent = 18740,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByParent_Active = 18741,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByParent_Classification = 18742,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 18743,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 18744,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalFromError = 18745,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalFromError_Active = 18746,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalFromError_Classification = 18747,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 18748,
    PublishSubscribeType_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 18749,
    PublishSubscribeType_Diagnostics_Counters_StatePausedByParent = 18750,
    PublishSubscribeType_Diagnostics_Counters_StatePausedByParent_Active = 18751,
    PublishSubscribeType_Diagnostics_Counters_StatePausedByParent_Classification = 18752,
    PublishSubscribeType_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 18753,
    PublishSubscribeType_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 18754,
    PublishSubscribeType_Diagnostics_Counters_StateDisabledByMethod = 18755,
    PublishSubscribeType_Diagnostics_Counters_StateDisabledByMethod_Active = 18756,
    PublishSubscribeType_Diagnostics_Counters_StateDisabledByMethod_Classification = 18757,
    PublishSubscribeType_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 18758,
    PublishSubscribeType_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 18759,
    PublishSubscribeType_Diagnostics_LiveValues = 18760,
    PublishSubscribeType_Diagnostics_LiveValues_ConfiguredDataSetWriters = 18761,
    PublishSubscribeType_Diagnostics_LiveValues_ConfiguredDataSetWriters_DiagnosticsLevel = 18762,
    PublishSubscribeType_Diagnostics_LiveValues_ConfiguredDataSetReaders = 18763,
    PublishSubscribeType_Diagnostics_LiveValues_ConfiguredDataSetReaders_DiagnosticsLevel = 18764,
    PublishSubscribeType_Diagnostics_LiveValues_OperationalDataSetWriters = 18765,
    PublishSubscribeType_Diagnostics_LiveValues_OperationalDataSetWriters_DiagnosticsLevel = 18766,
    PublishSubscribeType_Diagnostics_LiveValues_OperationalDataSetReaders = 18767,
    PublishSubscribeType_Diagnostics_LiveValues_OperationalDataSetReaders_DiagnosticsLevel = 18768,
    ThreeDVectorType_X = 18769,
    ThreeDVectorType_Y = 18770,
    ThreeDVectorType_Z = 18771,
    CartesianCoordinatesType = 18772,
    CartesianCoordinatesType_LengthUnit = 18773,
    ThreeDCartesianCoordinatesType = 18774,
    ThreeDCartesianCoordinatesType_LengthUnit = 18775,
    ThreeDCartesianCoordinatesType_X = 18776,
    ThreeDCartesianCoordinatesType_Y = 18777,
    ThreeDCartesianCoordinatesType_Z = 18778,
    OrientationType = 18779,
    OrientationType_AngleUnit = 18780,
    ThreeDOrientationType = 18781,
    ThreeDOrientationType_AngleUnit = 18782,
    ThreeDOrientationType_A = 18783,
    ThreeDOrientationType_B = 18784,
    ThreeDOrientationType_C = 18785,
    FrameType = 18786,
    FrameType_Orientation = 18787,
    FrameType_Constant = 18788,
    FrameType_BaseFrame = 18789,
    FrameType_FixedBase = 18790,
    ThreeDFrameType = 18791,
    ThreeDFrameType_Orientation = 18792,
    ThreeDFrameType_Constant = 18793,
    ThreeDFrameType_BaseFrame = 18794,
    ThreeDFrameType_FixedBase = 18795,
    ThreeDFrameType_CartesianCoordinates = 18796,
    ThreeDFrameType_CartesianCoordinates_LengthUnit = 18797,
    ThreeDFrameType_CartesianCoordinates_X = 18798,
    ThreeDFrameType_CartesianCoordinates_Y = 18799,
    ThreeDFrameType_CartesianCoordinates_Z = 18800,
    FrameType_CartesianCoordinates = 18801,
    FrameType_CartesianCoordinates_LengthUnit = 18802,
    FrameType_Orientation_AngleUnit = 18803,
    HasWriterGroup = 18804,
    HasReaderGroup = 18805,
    RationalNumber = 18806,
    Vector = 18807,
    ThreeDVector = 18808,
    CartesianCoordinates = 18809,
    ThreeDCartesianCoordinates = 18810,
    Orientation = 18811,
    ThreeDOrientation = 18812,
    Frame = 18813,
    ThreeDFrame = 18814,
    RationalNumber_Encoding_DefaultBinary = 18815,
    Vector_Encoding_DefaultBinary = 18816,
    ThreeDVector_Encoding_DefaultBinary = 18817,
    CartesianCoordinates_Encoding_DefaultBinary = 18818,
    ThreeDCartesianCoordinates_Encoding_DefaultBinary = 18819,
    Orientation_Encoding_DefaultBinary = 18820,
    ThreeDOrientation_Encoding_DefaultBinary = 18821,
    Frame_Encoding_DefaultBinary = 18822,
    ThreeDFrame_Encoding_DefaultBinary = 18823,
    OpcUa_BinarySchema_RationalNumber = 18824,
    OpcUa_BinarySchema_RationalNumber_DataTypeVersion = 18825,
    OpcUa_BinarySchema_RationalNumber_DictionaryFragment = 18826,
    OpcUa_BinarySchema_Vector = 18827,
    OpcUa_BinarySchema_Vector_DataTypeVersion = 18828,
    OpcUa_BinarySchema_Vector_DictionaryFragment = 18829,
    OpcUa_BinarySchema_ThreeDVector = 18830,
    OpcUa_BinarySchema_ThreeDVector_DataTypeVersion = 18831,
    OpcUa_BinarySchema_ThreeDVector_DictionaryFragment = 18832,
    OpcUa_BinarySchema_CartesianCoordinates = 18833,
    OpcUa_BinarySchema_CartesianCoordinates_DataTypeVersion = 18834,
    OpcUa_BinarySchema_CartesianCoordinates_DictionaryFragment = 18835,
    OpcUa_BinarySchema_ThreeDCartesianCoordinates = 18836,
    OpcUa_BinarySchema_ThreeDCartesianCoordinates_DataTypeVersion = 18837,
    OpcUa_BinarySchema_ThreeDCartesianCoordinates_DictionaryFragment = 18838,
    OpcUa_BinarySchema_Orientation = 18839,
    OpcUa_BinarySchema_Orientation_DataTypeVersion = 18840,
    OpcUa_BinarySchema_Orientation_DictionaryFragment = 18841,
    OpcUa_BinarySchema_ThreeDOrientation = 18842,
    OpcUa_BinarySchema_ThreeDOrientation_DataTypeVersion = 18843,
    OpcUa_BinarySchema_ThreeDOrientation_DictionaryFragment = 18844,
    OpcUa_BinarySchema_Frame = 18845,
    OpcUa_BinarySchema_Frame_DataTypeVersion = 18846,
    OpcUa_BinarySchema_Frame_DictionaryFragment = 18847,
    OpcUa_BinarySchema_ThreeDFrame = 18848,
    OpcUa_BinarySchema_ThreeDFrame_DataTypeVersion = 18849,
    OpcUa_BinarySchema_ThreeDFrame_DictionaryFragment = 18850,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics = 18871,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_DiagnosticsLevel = 18872,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation = 18873,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_Active = 18874,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_Classification = 18875,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 18876,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 18877,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalError = 18878,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalError_Active = 18879,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalError_Classification = 18880,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 18881,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 18882,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Reset = 18883,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_SubError = 18884,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters = 18885,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError = 18886,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_Active = 18887,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_Classification = 18888,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 18889,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 18890,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 18891,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 18892,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 18893,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 18894,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 18895,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 18896,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 18897,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 18898,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 18899,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 18900,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 18901,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 18902,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 18903,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 18904,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 18905,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent = 18906,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 18907,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 18908,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 18909,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 18910,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 18911,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 18912,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 18913,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 18914,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 18915,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues = 18916,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages = 18917,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Active = 18918,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Classification = 18919,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_DiagnosticsLevel = 18920,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_TimeFirstChange = 18921,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber = 18922,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 18923,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_StatusCode = 18924,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_StatusCode_DiagnosticsLevel = 18925,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MajorVersion = 18926,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MajorVersion_DiagnosticsLevel = 18927,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MinorVersion = 18928,
    PublishedDataSetType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MinorVersion_DiagnosticsLevel = 18929,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics = 18930,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_DiagnosticsLevel = 18931,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation = 18932,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_Active = 18933,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_Classification = 18934,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 18935,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 18936,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalError = 18937,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalError_Active = 18938,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalError_Classification = 18939,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 18940,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 18941,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Reset = 18942,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_SubError = 18943,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters = 18944,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError = 18945,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_Active = 18946,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_Classification = 18947,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 18948,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 18949,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 18950,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 18951,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 18952,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 18953,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 18954,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 18955,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 18956,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 18957,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 18958,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 18959,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 18960,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 18961,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 18962,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 18963,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 18964,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent = 18965,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 18966,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 18967,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 18968,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 18969,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 18970,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 18971,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 18972,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 18973,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 18974,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues = 18975,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages = 18976,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Active = 18977,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Classification = 18978,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_DiagnosticsLevel = 18979,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_TimeFirstChange = 18980,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber = 18981,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 18982,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_StatusCode = 18983,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_StatusCode_DiagnosticsLevel = 18984,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MajorVersion = 18985,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MajorVersion_DiagnosticsLevel = 18986,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MinorVersion = 18987,
    PublishedDataItemsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MinorVersion_DiagnosticsLevel = 18988,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics = 18989,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_DiagnosticsLevel = 18990,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation = 18991,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_Active = 18992,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_Classification = 18993,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 18994,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 18995,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalError = 18996,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalError_Active = 18997,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalError_Classification = 18998,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 18999,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 19000,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Reset = 19001,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_SubError = 19002,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters = 19003,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError = 19004,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_Active = 19005,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_Classification = 19006,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 19007,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 19008,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 19009,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 19010,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 19011,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 19012,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 19013,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 19014,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 19015,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 19016,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 19017,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 19018,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 19019,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 19020,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 19021,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 19022,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 19023,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent = 19024,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 19025,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 19026,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 19027,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 19028,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 19029,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 19030,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 19031,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 19032,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 19033,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues = 19034,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages = 19035,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Active = 19036,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_Classification = 19037,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_DiagnosticsLevel = 19038,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_Counters_FailedDataSetMessages_TimeFirstChange = 19039,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber = 19040,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 19041,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_StatusCode = 19042,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_StatusCode_DiagnosticsLevel = 19043,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MajorVersion = 19044,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MajorVersion_DiagnosticsLevel = 19045,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MinorVersion = 19046,
    PublishedEventsType_DataSetWriterName_Placeholder_Diagnostics_LiveValues_MinorVersion_DiagnosticsLevel = 19047,
    RationalNumber_Encoding_DefaultJson = 19064,
    Vector_Encoding_DefaultJson = 19065,
    ThreeDVector_Encoding_DefaultJson = 19066,
    CartesianCoordinates_Encoding_DefaultJson = 19067,
    ThreeDCartesianCoordinates_Encoding_DefaultJson = 19068,
    Orientation_Encoding_DefaultJson = 19069,
    ThreeDOrientation_Encoding_DefaultJson = 19070,
    Frame_Encoding_DefaultJson = 19071,
    ThreeDFrame_Encoding_DefaultJson = 19072,
    ThreeDFrameType_Orientation_AngleUnit = 19073,
    ThreeDFrameType_Orientation_A = 19074,
    ThreeDFrameType_Orientation_B = 19075,
    ThreeDFrameType_Orientation_C = 19076,
    MultiStateDictionaryEntryDiscreteBaseType = 19077,
    MultiStateDictionaryEntryDiscreteBaseType_Definition = 19078,
    MultiStateDictionaryEntryDiscreteBaseType_ValuePrecision = 19079,
    MultiStateDictionaryEntryDiscreteBaseType_EnumValues = 19080,
    MultiStateDictionaryEntryDiscreteBaseType_ValueAsText = 19081,
    MultiStateDictionaryEntryDiscreteBaseType_EnumDictionaryEntries = 19082,
    MultiStateDictionaryEntryDiscreteBaseType_ValueAsDictionaryEntries = 19083,
    MultiStateDictionaryEntryDiscreteType = 19084,
    MultiStateDictionaryEntryDiscreteType_Definition = 19085,
    MultiStateDictionaryEntryDiscreteType_ValuePrecision = 19086,
    MultiStateDictionaryEntryDiscreteType_EnumValues = 19087,
    MultiStateDictionaryEntryDiscreteType_ValueAsText = 19088,
    MultiStateDictionaryEntryDiscreteType_EnumDictionaryEntries = 19089,
    MultiStateDictionaryEntryDiscreteType_ValueAsDictionaryEntries = 19090,
    HistoryServerCapabilities_ServerTimestampSupported = 19091,
    HistoricalDataConfigurationType_ServerTimestampSupported = 19092,
    HAConfiguration_ServerTimestampSupported = 19093,
    HistoryServerCapabilitiesType_ServerTimestampSupported = 19094,
    AuditHistoryAnnotationUpdateEventType = 19095,
    AuditHistoryAnnotationUpdateEventType_EventId = 19096,
    AuditHistoryAnnotationUpdateEventType_EventType = 19097,
    AuditHistoryAnnotationUpdateEventType_SourceNode = 19098,
    AuditHistoryAnnotationUpdateEventType_SourceName = 19099,
    AuditHistoryAnnotationUpdateEventType_Time = 19100,
    AuditHistoryAnnotationUpdateEventType_ReceiveTime = 19101,
    AuditHistoryAnnotationUpdateEventType_LocalTime = 19102,
    AuditHistoryAnnotationUpdateEventType_Message = 19103,
    AuditHistoryAnnotationUpdateEventType_Severity = 19104,
    AuditHistoryAnnotationUpdateEventType_ActionTimeStamp = 19105,
    AuditHistoryAnnotationUpdateEventType_Status = 19106,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics = 19107,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_DiagnosticsLevel = 19108,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalInformation = 19109,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalInformation_Active = 19110,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalInformation_Classification = 19111,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 19112,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 19113,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalError = 19114,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalError_Active = 19115,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalError_Classification = 19116,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 19117,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 19118,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Reset = 19119,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_SubError = 19120,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters = 19121,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateError = 19122,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateError_Active = 19123,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateError_Classification = 19124,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 19125,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 19126,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 19127,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 19128,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 19129,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 19130,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 19131,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 19132,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 19133,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 19134,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 19135,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 19136,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 19137,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 19138,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 19139,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 19140,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 19141,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent = 19142,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 19143,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 19144,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 19145,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 19146,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 19147,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 19148,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 19149,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 19150,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 19151,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues = 19152,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_SentNetworkMessages = 19153,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_SentNetworkMessages_Active = 19154,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_SentNetworkMessages_Classification = 19155,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_SentNetworkMessages_DiagnosticsLevel = 19156,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_SentNetworkMessages_TimeFirstChange = 19157,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_FailedTransmissions = 19158,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_FailedTransmissions_Active = 19159,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_FailedTransmissions_Classification = 19160,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_FailedTransmissions_DiagnosticsLevel = 19161,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_FailedTransmissions_TimeFirstChange = 19162,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_EncryptionErrors = 19163,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_EncryptionErrors_Active = 19164,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_EncryptionErrors_Classification = 19165,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_EncryptionErrors_DiagnosticsLevel = 19166,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_Counters_EncryptionErrors_TimeFirstChange = 19167,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues_ConfiguredDataSetWriters = 19168,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues_ConfiguredDataSetWriters_DiagnosticsLevel = 19169,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues_OperationalDataSetWriters = 19170,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues_OperationalDataSetWriters_DiagnosticsLevel = 19171,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues_SecurityTokenID = 19172,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues_SecurityTokenID_DiagnosticsLevel = 19173,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues_TimeToNextTokenID = 19174,
    PubSubConnectionType_WriterGroupName_Placeholder_Diagnostics_LiveValues_TimeToNextTokenID_DiagnosticsLevel = 19175,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics = 19176,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_DiagnosticsLevel = 19177,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalInformation = 19178,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalInformation_Active = 19179,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalInformation_Classification = 19180,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalInformation_DiagnosticsLevel = 19181,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalInformation_TimeFirstChange = 19182,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalError = 19183,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalError_Active = 19184,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalError_Classification = 19185,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalError_DiagnosticsLevel = 19186,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_TotalError_TimeFirstChange = 19187,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Reset = 19188,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_SubError = 19189,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters = 19190,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateError = 19191,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateError_Active = 19192,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateError_Classification = 19193,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateError_DiagnosticsLevel = 19194,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateError_TimeFirstChange = 19195,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod = 19196,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Active = 19197,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_Classification = 19198,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 19199,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 19200,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent = 19201,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Active = 19202,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent_Classification = 19203,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 19204,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 19205,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError = 19206,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Active = 19207,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError_Classification = 19208,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 19209,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 19210,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent = 19211,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent_Active = 19212,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent_Classification = 19213,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 19214,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 19215,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod = 19216,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Active = 19217,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_Classification = 19218,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 19219,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 19220,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_LiveValues = 19221,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedNetworkMessages = 19222,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedNetworkMessages_Active = 19223,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedNetworkMessages_Classification = 19224,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedNetworkMessages_DiagnosticsLevel = 19225,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedNetworkMessages_TimeFirstChange = 19226,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedInvalidNetworkMessages = 19227,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedInvalidNetworkMessages_Active = 19228,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedInvalidNetworkMessages_Classification = 19229,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedInvalidNetworkMessages_DiagnosticsLevel = 19230,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_ReceivedInvalidNetworkMessages_TimeFirstChange = 19231,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_DecryptionErrors = 19232,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_DecryptionErrors_Active = 19233,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_DecryptionErrors_Classification = 19234,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_DecryptionErrors_DiagnosticsLevel = 19235,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_Counters_DecryptionErrors_TimeFirstChange = 19236,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_LiveValues_ConfiguredDataSetReaders = 19237,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_LiveValues_ConfiguredDataSetReaders_DiagnosticsLevel = 19238,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_LiveValues_OperationalDataSetReaders = 19239,
    PubSubConnectionType_ReaderGroupName_Placeholder_Diagnostics_LiveValues_OperationalDataSetReaders_DiagnosticsLevel = 19240,
    PubSubConnectionType_Diagnostics = 19241,
    PubSubConnectionType_Diagnostics_DiagnosticsLevel = 19242,
    PubSubConnectionType_Diagnostics_TotalInformation = 19243,
    PubSubConnectionType_Diagnostics_TotalInformation_Active = 19244,
    PubSubConnectionType_Diagnostics_TotalInformation_Classification = 19245,
    PubSubConnectionType_Diagnostics_TotalInformation_DiagnosticsLevel = 19246,
    PubSubConnectionType_Diagnostics_TotalInformation_TimeFirstChange = 19247,
    PubSubConnectionType_Diagnostics_TotalError = 19248,
    PubSubConnectionType_Diagnostics_TotalError_Active = 19249,
    PubSubConnectionType_Diagnostics_TotalError_Classification = 19250,
    PubSubConnectionType_Diagnostics_TotalError_DiagnosticsLevel = 19251,
    PubSubConnectionType_Diagnostics_TotalError_TimeFirstChange = 19252,
    PubSubConnectionType_Diagnostics_Reset = 19253,
    PubSubConnectionType_Diagnostics_SubError = 19254,
    PubSubConnectionType_Diagnostics_Counters = 19255,
    PubSubConnectionType_Diagnostics_Counters_StateError = 19256,
    PubSubConnectionType_Diagnostics_Counters_StateError_Active = 19257,
    PubSubConnectionType_Diagnostics_Counters_StateError_Classification = 19258,
    PubSubConnectionType_Diagnostics_Counters_StateError_DiagnosticsLevel = 19259,
    PubSubConnectionType_Diagnostics_Counters_StateError_TimeFirstChange = 19260,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByMethod = 19261,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByMethod_Active = 19262,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByMethod_Classification = 19263,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 19264,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 19265,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByParent = 19266,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByParent_Active = 19267,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByParent_Classification = 19268,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 19269,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 19270,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalFromError = 19271,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalFromError_Active = 19272,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalFromError_Classification = 19273,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 19274,
    PubSubConnectionType_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 19275,
    PubSubConnectionType_Diagnostics_Counters_StatePausedByParent = 19276,
    PubSubConnectionType_Diagnostics_Counters_StatePausedByParent_Active = 19277,
    PubSubConnectionType_Diagnostics_Counters_StatePausedByParent_Classification = 19278,
    PubSubConnectionType_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 19279,
    PubSubConnectionType_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 19280,
    PubSubConnectionType_Diagnostics_Counters_StateDisabledByMethod = 19281,
    PubSubConnectionType_Diagnostics_Counters_StateDisabledByMethod_Active = 19282,
    PubSubConnectionType_Diagnostics_Counters_StateDisabledByMethod_Classification = 19283,
    PubSubConnectionType_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 19284,
    PubSubConnectionType_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 19285,
    PubSubConnectionType_Diagnostics_LiveValues = 19286,
    PubSubConnectionType_Diagnostics_LiveValues_ResolvedAddress = 19287,
    PubSubConnectionType_Diagnostics_LiveValues_ResolvedAddress_DiagnosticsLevel = 19288,
    AuditHistoryAnnotationUpdateEventType_ServerId = 19289,
    AuditHistoryAnnotationUpdateEventType_ClientAuditEntryId = 19290,
    AuditHistoryAnnotationUpdateEventType_ClientUserId = 19291,
    AuditHistoryAnnotationUpdateEventType_ParameterDataTypeId = 19292,
    AuditHistoryAnnotationUpdateEventType_PerformInsertReplace = 19293,
    AuditHistoryAnnotationUpdateEventType_NewValues = 19294,
    AuditHistoryAnnotationUpdateEventType_OldValues = 19295,
    TrustListType_UpdateFrequency = 19296,
    TrustListOutOfDateAlarmType = 19297,
    TrustListOutOfDateAlarmType_EventId = 19298,
    TrustListOutOfDateAlarmType_EventType = 19299,
    TrustListOutOfDateAlarmType_SourceNode = 19300,
    TrustListOutOfDateAlarmType_SourceName = 19301,
    TrustListOutOfDateAlarmType_Time = 19302,
    TrustListOutOfDateAlarmType_ReceiveTime = 19303,
    TrustListOutOfDateAlarmType_LocalTime = 19304,
    TrustListOutOfDateAlarmType_Message = 19305,
    TrustListOutOfDateAlarmType_Severity = 19306,
    TrustListOutOfDateAlarmType_ConditionClassId = 19307,
    TrustListOutOfDateAlarmType_ConditionClassName = 19308,
    TrustListOutOfDateAlarmType_ConditionSubClassId = 19309,
    TrustListOutOfDateAlarmType_ConditionSubClassName = 19310,
    TrustListOutOfDateAlarmType_ConditionName = 19311,
    TrustListOutOfDateAlarmType_BranchId = 19312,
    TrustListOutOfDateAlarmType_Retain = 19313,
    TrustListOutOfDateAlarmType_EnabledState = 19314,
    TrustListOutOfDateAlarmType_EnabledState_Id = 19315,
    TrustListOutOfDateAlarmType_EnabledState_Name = 19316,
    TrustListOutOfDateAlarmType_EnabledState_Number = 19317,
    TrustListOutOfDateAlarmType_EnabledState_EffectiveDisplayName = 19318,
    TrustListOutOfDateAlarmType_EnabledState_TransitionTime = 19319,
    TrustListOutOfDateAlarmType_EnabledState_EffectiveTransitionTime = 19320,
    TrustListOutOfDateAlarmType_EnabledState_TrueState = 19321,
    TrustListOutOfDateAlarmType_EnabledState_FalseState = 19322,
    TrustListOutOfDateAlarmType_Quality = 19323,
    TrustListOutOfDateAlarmType_Quality_SourceTimestamp = 19324,
    TrustListOutOfDateAlarmType_LastSeverity = 19325,
    TrustListOutOfDateAlarmType_LastSeverity_SourceTimestamp = 19326,
    TrustListOutOfDateAlarmType_Comment = 19327,
    TrustListOutOfDateAlarmType_Comment_SourceTimestamp = 19328,
    TrustListOutOfDateAlarmType_ClientUserId = 19329,
    TrustListOutOfDateAlarmType_Disable = 19330,
    TrustListOutOfDateAlarmType_Enable = 19331,
    TrustListOutOfDateAlarmType_AddComment = 19332,
    TrustListOutOfDateAlarmType_AddComment_InputArguments = 19333,
    TrustListOutOfDateAlarmType_ConditionRefresh = 19334,
    TrustListOutOfDateAlarmType_ConditionRefresh_InputArguments = 19335,
    TrustListOutOfDateAlarmType_ConditionRefresh2 = 19336,
    TrustListOutOfDateAlarmType_ConditionRefresh2_InputArguments = 19337,
    TrustListOutOfDateAlarmType_AckedState = 19338,
    TrustListOutOfDateAlarmType_AckedState_Id = 19339,
    TrustListOutOfDateAlarmType_AckedState_Name = 19340,
    TrustListOutOfDateAlarmType_AckedState_Number = 19341,
    TrustListOutOfDateAlarmType_AckedState_EffectiveDisplayName = 19342,
    TrustListOutOfDateAlarmType_AckedState_TransitionTime = 19343,
    TrustListOutOfDateAlarmType_AckedState_EffectiveTransitionTime = 19344,
    TrustListOutOfDateAlarmType_AckedState_TrueState = 19345,
    TrustListOutOfDateAlarmType_AckedState_FalseState = 19346,
    TrustListOutOfDateAlarmType_ConfirmedState = 19347,
    TrustListOutOfDateAlarmType_ConfirmedState_Id = 19348,
    TrustListOutOfDateAlarmType_ConfirmedState_Name = 19349,
    TrustListOutOfDateAlarmType_ConfirmedState_Number = 19350,
    TrustListOutOfDateAlarmType_ConfirmedState_EffectiveDisplayName = 19351,
    TrustListOutOfDateAlarmType_ConfirmedState_TransitionTime = 19352,
    TrustListOutOfDateAlarmType_ConfirmedState_EffectiveTransitionTime = 19353,
    TrustListOutOfDateAlarmType_ConfirmedState_TrueState = 19354,
    TrustListOutOfDateAlarmType_ConfirmedState_FalseState = 19355,
    TrustListOutOfDateAlarmType_Acknowledge = 19356,
    TrustListOutOfDateAlarmType_Acknowledge_InputArguments = 19357,
    TrustListOutOfDateAlarmType_Confirm = 19358,
    TrustListOutOfDateAlarmType_Confirm_InputArguments = 19359,
    TrustListOutOfDateAlarmType_ActiveState = 19360,
    TrustListOutOfDateAlarmType_ActiveState_Id = 19361,
    TrustListOutOfDateAlarmType_ActiveState_Name = 19362,
    TrustListOutOfDateAlarmType_ActiveState_Number = 19363,
    TrustListOutOfDateAlarmType_ActiveState_EffectiveDisplayName = 19364,
    TrustListOutOfDateAlarmType_ActiveState_TransitionTime = 19365,
    TrustListOutOfDateAlarmType_ActiveState_EffectiveTransitionTime = 19366,
    TrustListOutOfDateAlarmType_ActiveState_TrueState = 19367,
    TrustListOutOfDateAlarmType_ActiveState_FalseState = 19368,
    TrustListOutOfDateAlarmType_InputNode = 19369,
    TrustListOutOfDateAlarmType_SuppressedState = 19370,
    TrustListOutOfDateAlarmType_SuppressedState_Id = 19371,
    TrustListOutOfDateAlarmType_SuppressedState_Name = 19372,
    TrustListOutOfDateAlarmType_SuppressedState_Number = 19373,
    TrustListOutOfDateAlarmType_SuppressedState_EffectiveDisplayName = 19374,
    TrustListOutOfDateAlarmType_SuppressedState_TransitionTime = 19375,
    TrustListOutOfDateAlarmType_SuppressedState_EffectiveTransitionTime = 19376,
    TrustListOutOfDateAlarmType_SuppressedState_TrueState = 19377,
    TrustListOutOfDateAlarmType_SuppressedState_FalseState = 19378,
    TrustListOutOfDateAlarmType_OutOfServiceState = 19379,
    TrustListOutOfDateAlarmType_OutOfServiceState_Id = 19380,
    TrustListOutOfDateAlarmType_OutOfServiceState_Name = 19381,
    TrustListOutOfDateAlarmType_OutOfServiceState_Number = 19382,
    TrustListOutOfDateAlarmType_OutOfServiceState_EffectiveDisplayName = 19383,
    TrustListOutOfDateAlarmType_OutOfServiceState_TransitionTime = 19384,
    TrustListOutOfDateAlarmType_OutOfServiceState_EffectiveTransitionTime = 19385,
    TrustListOutOfDateAlarmType_OutOfServiceState_TrueState = 19386,
    TrustListOutOfDateAlarmType_OutOfServiceState_FalseState = 19387,
    TrustListOutOfDateAlarmType_ShelvingState = 19388,
    TrustListOutOfDateAlarmType_ShelvingState_CurrentState = 19389,
    TrustListOutOfDateAlarmType_ShelvingState_CurrentState_Id = 19390,
    TrustListOutOfDateAlarmType_ShelvingState_CurrentState_Name = 19391,
    TrustListOutOfDateAlarmType_ShelvingState_CurrentState_Number = 19392,
    TrustListOutOfDateAlarmType_ShelvingState_CurrentState_EffectiveDisplayName = 19393,
    TrustListOutOfDateAlarmType_ShelvingState_LastTransition = 19394,
    TrustListOutOfDateAlarmType_ShelvingState_LastTransition_Id = 19395,
    TrustListOutOfDateAlarmType_ShelvingState_LastTransition_Name = 19396,
    TrustListOutOfDateAlarmType_ShelvingState_LastTransition_Number = 19397,
    TrustListOutOfDateAlarmType_ShelvingState_LastTransition_TransitionTime = 19398,
    TrustListOutOfDateAlarmType_ShelvingState_LastTransition_EffectiveTransitionTime = 19399,
    TrustListOutOfDateAlarmType_ShelvingState_AvailableStates = 19400,
    TrustListOutOfDateAlarmType_ShelvingState_AvailableTransitions = 19401,
    TrustListOutOfDateAlarmType_ShelvingState_UnshelveTime = 19402,
    TrustListOutOfDateAlarmType_ShelvingState_TimedShelve = 19403,
    TrustListOutOfDateAlarmType_ShelvingState_TimedShelve_InputArguments = 19404,
    TrustListOutOfDateAlarmType_ShelvingState_Unshelve = 19405,
    TrustListOutOfDateAlarmType_ShelvingState_OneShotShelve = 19406,
    TrustListOutOfDateAlarmType_SuppressedOrShelved = 19407,
    TrustListOutOfDateAlarmType_MaxTimeShelved = 19408,
    TrustListOutOfDateAlarmType_AudibleEnabled = 19409,
    TrustListOutOfDateAlarmType_AudibleSound = 19410,
    TrustListOutOfDateAlarmType_AudibleSound_ListId = 19411,
    TrustListOutOfDateAlarmType_AudibleSound_AgencyId = 19412,
    TrustListOutOfDateAlarmType_AudibleSound_VersionId = 19413,
    TrustListOutOfDateAlarmType_SilenceState = 19414,
    TrustListOutOfDateAlarmType_SilenceState_Id = 19415,
    TrustListOutOfDateAlarmType_SilenceState_Name = 19416,
    TrustListOutOfDateAlarmType_SilenceState_Number = 19417,
    TrustListOutOfDateAlarmType_SilenceState_EffectiveDisplayName = 19418,
    TrustListOutOfDateAlarmType_SilenceState_TransitionTime = 19419,
    TrustListOutOfDateAlarmType_SilenceState_EffectiveTransitionTime = 19420,
    TrustListOutOfDateAlarmType_SilenceState_TrueState = 19421,
    TrustListOutOfDateAlarmType_SilenceState_FalseState = 19422,
    TrustListOutOfDateAlarmType_OnDelay = 19423,
    TrustListOutOfDateAlarmType_OffDelay = 19424,
    TrustListOutOfDateAlarmType_FirstInGroupFlag = 19425,
    TrustListOutOfDateAlarmType_FirstInGroup = 19426,
    TrustListOutOfDateAlarmType_LatchedState = 19427,
    TrustListOutOfDateAlarmType_LatchedState_Id = 19428,
    TrustListOutOfDateAlarmType_LatchedState_Name = 19429,
    TrustListOutOfDateAlarmType_LatchedState_Number = 19430,
    TrustListOutOfDateAlarmType_LatchedState_EffectiveDisplayName = 19431,
    TrustListOutOfDateAlarmType_LatchedState_TransitionTime = 19432,
    TrustListOutOfDateAlarmType_LatchedState_EffectiveTransitionTime = 19433,
    TrustListOutOfDateAlarmType_LatchedState_TrueState = 19434,
    TrustListOutOfDateAlarmType_LatchedState_FalseState = 19435,
    TrustListOutOfDateAlarmType_AlarmGroup_Placeholder = 19436,
    TrustListOutOfDateAlarmType_ReAlarmTime = 19437,
    TrustListOutOfDateAlarmType_ReAlarmRepeatCount = 19438,
    TrustListOutOfDateAlarmType_Silence = 19439,
    TrustListOutOfDateAlarmType_Suppress = 19440,
    TrustListOutOfDateAlarmType_Unsuppress = 19441,
    TrustListOutOfDateAlarmType_RemoveFromService = 19442,
    TrustListOutOfDateAlarmType_PlaceInService = 19443,
    TrustListOutOfDateAlarmType_Reset = 19444,
    TrustListOutOfDateAlarmType_NormalState = 19445,
    TrustListOutOfDateAlarmType_TrustListId = 19446,
    TrustListOutOfDateAlarmType_LastUpdateTime = 19447,
    TrustListOutOfDateAlarmType_UpdateFrequency = 19448,
    CertificateGroupType_TrustList_UpdateFrequency = 19449,
    CertificateGroupType_CertificateExpired = 19450,
    CertificateGroupType_CertificateExpired_EventId = 19451,
    CertificateGroupType_CertificateExpired_EventType = 19452,
    CertificateGroupType_CertificateExpired_SourceNode = 19453,
    CertificateGroupType_CertificateExpired_SourceName = 19454,
    CertificateGroupType_CertificateExpired_Time = 19455,
    CertificateGroupType_CertificateExpired_ReceiveTime = 19456,
    CertificateGroupType_CertificateExpired_LocalTime = 19457,
    CertificateGroupType_CertificateExpired_Message = 19458,
    CertificateGroupType_CertificateExpired_Severity = 19459,
    CertificateGroupType_CertificateExpired_ConditionClassId = 19460,
    CertificateGroupType_CertificateExpired_ConditionClassName = 19461,
    CertificateGroupType_CertificateExpired_ConditionSubClassId = 19462,
    CertificateGroupType_CertificateExpired_ConditionSubClassName = 19463,
    CertificateGroupType_CertificateExpired_ConditionName = 19464,
    CertificateGroupType_CertificateExpired_BranchId = 19465,
    CertificateGroupType_CertificateExpired_Retain = 19466,
    CertificateGroupType_CertificateExpired_EnabledState = 19467,
    CertificateGroupType_CertificateExpired_EnabledState_Id = 19468,
    CertificateGroupType_CertificateExpired_EnabledState_Name = 19469,
    CertificateGroupType_CertificateExpired_EnabledState_Number = 19470,
    CertificateGroupType_CertificateExpired_EnabledState_EffectiveDisplayName = 19471,
    CertificateGroupType_CertificateExpired_EnabledState_TransitionTime = 19472,
    CertificateGroupType_CertificateExpired_EnabledState_EffectiveTransitionTime = 19473,
    CertificateGroupType_CertificateExpired_EnabledState_TrueState = 19474,
    CertificateGroupType_CertificateExpired_EnabledState_FalseState = 19475,
    CertificateGroupType_CertificateExpired_Quality = 19476,
    CertificateGroupType_CertificateExpired_Quality_SourceTimestamp = 19477,
    CertificateGroupType_CertificateExpired_LastSeverity = 19478,
    CertificateGroupType_CertificateExpired_LastSeverity_SourceTimestamp = 19479,
    CertificateGroupType_CertificateExpired_Comment = 19480,
    CertificateGroupType_CertificateExpired_Comment_SourceTimestamp = 19481,
    CertificateGroupType_CertificateExpired_ClientUserId = 19482,
    CertificateGroupType_CertificateExpired_Disable = 19483,
    CertificateGroupType_CertificateExpired_Enable = 19484,
    CertificateGroupType_CertificateExpired_AddComment = 19485,
    CertificateGroupType_CertificateExpired_AddComment_InputArguments = 19486,
    CertificateGroupType_CertificateExpired_AckedState = 19487,
    CertificateGroupType_CertificateExpired_AckedState_Id = 19488,
    CertificateGroupType_CertificateExpired_AckedState_Name = 19489,
    CertificateGroupType_CertificateExpired_AckedState_Number = 19490,
    CertificateGroupType_CertificateExpired_AckedState_EffectiveDisplayName = 19491,
    CertificateGroupType_CertificateExpired_AckedState_TransitionTime = 19492,
    CertificateGroupType_CertificateExpired_AckedState_EffectiveTransitionTime = 19493,
    CertificateGroupType_CertificateExpired_AckedState_TrueState = 19494,
    CertificateGroupType_CertificateExpired_AckedState_FalseState = 19495,
    CertificateGroupType_CertificateExpired_ConfirmedState = 19496,
    CertificateGroupType_CertificateExpired_ConfirmedState_Id = 19497,
    CertificateGroupType_CertificateExpired_ConfirmedState_Name = 19498,
    CertificateGroupType_CertificateExpired_ConfirmedState_Number = 19499,
    CertificateGroupType_CertificateExpired_ConfirmedState_EffectiveDisplayName = 19500,
    CertificateGroupType_CertificateExpired_ConfirmedState_TransitionTime = 19501,
    CertificateGroupType_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 19502,
    CertificateGroupType_CertificateExpired_ConfirmedState_TrueState = 19503,
    CertificateGroupType_CertificateExpired_ConfirmedState_FalseState = 19504,
    CertificateGroupType_CertificateExpired_Acknowledge = 19505,
    CertificateGroupType_CertificateExpired_Acknowledge_InputArguments = 19506,
    CertificateGroupType_CertificateExpired_Confirm = 19507,
    CertificateGroupType_CertificateExpired_Confirm_InputArguments = 19508,
    CertificateGroupType_CertificateExpired_ActiveState = 19509,
    CertificateGroupType_CertificateExpired_ActiveState_Id = 19510,
    CertificateGroupType_CertificateExpired_ActiveState_Name = 19511,
    CertificateGroupType_CertificateExpired_ActiveState_Number = 19512,
    CertificateGroupType_CertificateExpired_ActiveState_EffectiveDisplayName = 19513,
    CertificateGroupType_CertificateExpired_ActiveState_TransitionTime = 19514,
    CertificateGroupType_CertificateExpired_ActiveState_EffectiveTransitionTime = 19515,
    CertificateGroupType_CertificateExpired_ActiveState_TrueState = 19516,
    CertificateGroupType_CertificateExpired_ActiveState_FalseState = 19517,
    CertificateGroupType_CertificateExpired_InputNode = 19518,
    CertificateGroupType_CertificateExpired_SuppressedState = 19519,
    CertificateGroupType_CertificateExpired_SuppressedState_Id = 19520,
    CertificateGroupType_CertificateExpired_SuppressedState_Name = 19521,
    CertificateGroupType_CertificateExpired_SuppressedState_Number = 19522,
    CertificateGroupType_CertificateExpired_SuppressedState_EffectiveDisplayName = 19523,
    CertificateGroupType_CertificateExpired_SuppressedState_TransitionTime = 19524,
    CertificateGroupType_CertificateExpired_SuppressedState_EffectiveTransitionTime = 19525,
    CertificateGroupType_CertificateExpired_SuppressedState_TrueState = 19526,
    CertificateGroupType_CertificateExpired_SuppressedState_FalseState = 19527,
    CertificateGroupType_CertificateExpired_OutOfServiceState = 19528,
    CertificateGroupType_CertificateExpired_OutOfServiceState_Id = 19529,
    CertificateGroupType_CertificateExpired_OutOfServiceState_Name = 19530,
    CertificateGroupType_CertificateExpired_OutOfServiceState_Number = 19531,
    CertificateGroupType_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 19532,
    CertificateGroupType_CertificateExpired_OutOfServiceState_TransitionTime = 19533,
    CertificateGroupType_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 19534,
    CertificateGroupType_CertificateExpired_OutOfServiceState_TrueState = 19535,
    CertificateGroupType_CertificateExpired_OutOfServiceState_FalseState = 19536,
    CertificateGroupType_CertificateExpired_ShelvingState = 19537,
    CertificateGroupType_CertificateExpired_ShelvingState_CurrentState = 19538,
    CertificateGroupType_CertificateExpired_ShelvingState_CurrentState_Id = 19539,
    CertificateGroupType_CertificateExpired_ShelvingState_CurrentState_Name = 19540,
    CertificateGroupType_CertificateExpired_ShelvingState_CurrentState_Number = 19541,
    CertificateGroupType_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 19542,
    CertificateGroupType_CertificateExpired_ShelvingState_LastTransition = 19543,
    CertificateGroupType_CertificateExpired_ShelvingState_LastTransition_Id = 19544,
    CertificateGroupType_CertificateExpired_ShelvingState_LastTransition_Name = 19545,
    CertificateGroupType_CertificateExpired_ShelvingState_LastTransition_Number = 19546,
    CertificateGroupType_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 19547,
    CertificateGroupType_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 19548,
    CertificateGroupType_CertificateExpired_ShelvingState_AvailableStates = 19549,
    DataSetWriterType_Diagnostics = 19550,
    DataSetWriterType_Diagnostics_DiagnosticsLevel = 19551,
    DataSetWriterType_Diagnostics_TotalInformation = 19552,
    DataSetWriterType_Diagnostics_TotalInformation_Active = 19553,
    DataSetWriterType_Diagnostics_TotalInformation_Classification = 19554,
    DataSetWriterType_Diagnostics_TotalInformation_DiagnosticsLevel = 19555,
    DataSetWriterType_Diagnostics_TotalInformation_TimeFirstChange = 19556,
    DataSetWriterType_Diagnostics_TotalError = 19557,
    DataSetWriterType_Diagnostics_TotalError_Active = 19558,
    DataSetWriterType_Diagnostics_TotalError_Classification = 19559,
    DataSetWriterType_Diagnostics_TotalError_DiagnosticsLevel = 19560,
    DataSetWriterType_Diagnostics_TotalError_TimeFirstChange = 19561,
    DataSetWriterType_Diagnostics_Reset = 19562,
    DataSetWriterType_Diagnostics_SubError = 19563,
    DataSetWriterType_Diagnostics_Counters = 19564,
    DataSetWriterType_Diagnostics_Counters_StateError = 19565,
    DataSetWriterType_Diagnostics_Counters_StateError_Active = 19566,
    DataSetWriterType_Diagnostics_Counters_StateError_Classification = 19567,
    DataSetWriterType_Diagnostics_Counters_StateError_DiagnosticsLevel = 19568,
    DataSetWriterType_Diagnostics_Counters_StateError_TimeFirstChange = 19569,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByMethod = 19570,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByMethod_Active = 19571,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByMethod_Classification = 19572,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 19573,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 19574,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByParent = 19575,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByParent_Active = 19576,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByParent_Classification = 19577,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 19578,
    DataSetWriterType_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 19579,
    DataSetWriterType_Diagnostics_Counters_StateOperationalFromError = 19580,
    DataSetWriterType_Diagnostics_Counters_StateOperationalFromError_Active = 19581,
    DataSetWriterType_Diagnostics_Counters_StateOperationalFromError_Classification = 19582,
    DataSetWriterType_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 19583,
    DataSetWriterType_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 19584,
    DataSetWriterType_Diagnostics_Counters_StatePausedByParent = 19585,
    DataSetWriterType_Diagnostics_Counters_StatePausedByParent_Active = 19586,
    DataSetWriterType_Diagnostics_Counters_StatePausedByParent_Classification = 19587,
    DataSetWriterType_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 19588,
    DataSetWriterType_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 19589,
    DataSetWriterType_Diagnostics_Counters_StateDisabledByMethod = 19590,
    DataSetWriterType_Diagnostics_Counters_StateDisabledByMethod_Active = 19591,
    DataSetWriterType_Diagnostics_Counters_StateDisabledByMethod_Classification = 19592,
    DataSetWriterType_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 19593,
    DataSetWriterType_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 19594,
    DataSetWriterType_Diagnostics_LiveValues = 19595,
    DataSetWriterType_Diagnostics_Counters_FailedDataSetMessages = 19596,
    DataSetWriterType_Diagnostics_Counters_FailedDataSetMessages_Active = 19597,
    DataSetWriterType_Diagnostics_Counters_FailedDataSetMessages_Classification = 19598,
    DataSetWriterType_Diagnostics_Counters_FailedDataSetMessages_DiagnosticsLevel = 19599,
    DataSetWriterType_Diagnostics_Counters_FailedDataSetMessages_TimeFirstChange = 19600,
    DataSetWriterType_Diagnostics_LiveValues_MessageSequenceNumber = 19601,
    DataSetWriterType_Diagnostics_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 19602,
    DataSetWriterType_Diagnostics_LiveValues_StatusCode = 19603,
    DataSetWriterType_Diagnostics_LiveValues_StatusCode_DiagnosticsLevel = 19604,
    DataSetWriterType_Diagnostics_LiveValues_MajorVersion = 19605,
    DataSetWriterType_Diagnostics_LiveValues_MajorVersion_DiagnosticsLevel = 19606,
    DataSetWriterType_Diagnostics_LiveValues_MinorVersion = 19607,
    DataSetWriterType_Diagnostics_LiveValues_MinorVersion_DiagnosticsLevel = 19608,
    DataSetReaderType_Diagnostics = 19609,
    DataSetReaderType_Diagnostics_DiagnosticsLevel = 19610,
    DataSetReaderType_Diagnostics_TotalInformation = 19611,
    DataSetReaderType_Diagnostics_TotalInformation_Active = 19612,
    DataSetReaderType_Diagnostics_TotalInformation_Classification = 19613,
    DataSetReaderType_Diagnostics_TotalInformation_DiagnosticsLevel = 19614,
    DataSetReaderType_Diagnostics_TotalInformation_TimeFirstChange = 19615,
    DataSetReaderType_Diagnostics_TotalError = 19616,
    DataSetReaderType_Diagnostics_TotalError_Active = 19617,
    DataSetReaderType_Diagnostics_TotalError_Classification = 19618,
    DataSetReaderType_Diagnostics_TotalError_DiagnosticsLevel = 19619,
    DataSetReaderType_Diagnostics_TotalError_TimeFirstChange = 19620,
    DataSetReaderType_Diagnostics_Reset = 19621,
    DataSetReaderType_Diagnostics_SubError = 19622,
    DataSetReaderType_Diagnostics_Counters = 19623,
    DataSetReaderType_Diagnostics_Counters_StateError = 19624,
    DataSetReaderType_Diagnostics_Counters_StateError_Active = 19625,
    DataSetReaderType_Diagnostics_Counters_StateError_Classification = 19626,
    DataSetReaderType_Diagnostics_Counters_StateError_DiagnosticsLevel = 19627,
    DataSetReaderType_Diagnostics_Counters_StateError_TimeFirstChange = 19628,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByMethod = 19629,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByMethod_Active = 19630,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByMethod_Classification = 19631,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 19632,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 19633,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByParent = 19634,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByParent_Active = 19635,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByParent_Classification = 19636,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 19637,
    DataSetReaderType_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 19638,
    DataSetReaderType_Diagnostics_Counters_StateOperationalFromError = 19639,
    DataSetReaderType_Diagnostics_Counters_StateOperationalFromError_Active = 19640,
    DataSetReaderType_Diagnostics_Counters_StateOperationalFromError_Classification = 19641,
    DataSetReaderType_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 19642,
    DataSetReaderType_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 19643,
    DataSetReaderType_Diagnostics_Counters_StatePausedByParent = 19644,
    DataSetReaderType_Diagnostics_Counters_StatePausedByParent_Active = 19645,
    DataSetReaderType_Diagnostics_Counters_StatePausedByParent_Classification = 19646,
    DataSetReaderType_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 19647,
    DataSetReaderType_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 19648,
    DataSetReaderType_Diagnostics_Counters_StateDisabledByMethod = 19649,
    DataSetReaderType_Diagnostics_Counters_StateDisabledByMethod_Active = 19650,
    DataSetReaderType_Diagnostics_Counters_StateDisabledByMethod_Classification = 19651,
    DataSetReaderType_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 19652,
    DataSetReaderType_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 19653,
    DataSetReaderType_Diagnostics_LiveValues = 19654,
    DataSetReaderType_Diagnostics_Counters_FailedDataSetMessages = 19655,
    DataSetReaderType_Diagnostics_Counters_FailedDataSetMessages_Active = 19656,
    DataSetReaderType_Diagnostics_Counters_FailedDataSetMessages_Classification = 19657,
    DataSetReaderType_Diagnostics_Counters_FailedDataSetMessages_DiagnosticsLevel = 19658,
    DataSetReaderType_Diagnostics_Counters_FailedDataSetMessages_TimeFirstChange = 19659,
    DataSetReaderType_Diagnostics_Counters_DecryptionErrors = 19660,
    DataSetReaderType_Diagnostics_Counters_DecryptionErrors_Active = 19661,
    DataSetReaderType_Diagnostics_Counters_DecryptionErrors_Classification = 19662,
    DataSetReaderType_Diagnostics_Counters_DecryptionErrors_DiagnosticsLevel = 19663,
    DataSetReaderType_Diagnostics_Counters_DecryptionErrors_TimeFirstChange = 19664,
    DataSetReaderType_Diagnostics_LiveValues_MessageSequenceNumber = 19665,
    DataSetReaderType_Diagnostics_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 19666,
    DataSetReaderType_Diagnostics_LiveValues_StatusCode = 19667,
    DataSetReaderType_Diagnostics_LiveValues_StatusCode_DiagnosticsLevel = 19668,
    DataSetReaderType_Diagnostics_LiveValues_MajorVersion = 19669,
    DataSetReaderType_Diagnostics_LiveValues_MajorVersion_DiagnosticsLevel = 19670,
    DataSetReaderType_Diagnostics_LiveValues_MinorVersion = 19671,
    DataSetReaderType_Diagnostics_LiveValues_MinorVersion_DiagnosticsLevel = 19672,
    DataSetReaderType_Diagnostics_LiveValues_SecurityTokenID = 19673,
    DataSetReaderType_Diagnostics_LiveValues_SecurityTokenID_DiagnosticsLevel = 19674,
    DataSetReaderType_Diagnostics_LiveValues_TimeToNextTokenID = 19675,
    DataSetReaderType_Diagnostics_LiveValues_TimeToNextTokenID_DiagnosticsLevel = 19676,
    PubSubDiagnosticsType = 19677,
    PubSubDiagnosticsType_DiagnosticsLevel = 19678,
    PubSubDiagnosticsType_TotalInformation = 19679,
    PubSubDiagnosticsType_TotalInformation_Active = 19680,
    PubSubDiagnosticsType_TotalInformation_Classification = 19681,
    PubSubDiagnosticsType_TotalInformation_DiagnosticsLevel = 19682,
    PubSubDiagnosticsType_TotalInformation_TimeFirstChange = 19683,
    PubSubDiagnosticsType_TotalError = 19684,
    PubSubDiagnosticsType_TotalError_Active = 19685,
    PubSubDiagnosticsType_TotalError_Classification = 19686,
    PubSubDiagnosticsType_TotalError_DiagnosticsLevel = 19687,
    PubSubDiagnosticsType_TotalError_TimeFirstChange = 19688,
    PubSubDiagnosticsType_Reset = 19689,
    PubSubDiagnosticsType_SubError = 19690,
    PubSubDiagnosticsType_Counters = 19691,
    PubSubDiagnosticsType_Counters_StateError = 19692,
    PubSubDiagnosticsType_Counters_StateError_Active = 19693,
    PubSubDiagnosticsType_Counters_StateError_Classification = 19694,
    PubSubDiagnosticsType_Counters_StateError_DiagnosticsLevel = 19695,
    PubSubDiagnosticsType_Counters_StateError_TimeFirstChange = 19696,
    PubSubDiagnosticsType_Counters_StateOperationalByMethod = 19697,
    PubSubDiagnosticsType_Counters_StateOperationalByMethod_Active = 19698,
    PubSubDiagnosticsType_Counters_StateOperationalByMethod_Classification = 19699,
    PubSubDiagnosticsType_Counters_StateOperationalByMethod_DiagnosticsLevel = 19700,
    PubSubDiagnosticsType_Counters_StateOperationalByMethod_TimeFirstChange = 19701,
    PubSubDiagnosticsType_Counters_StateOperationalByParent = 19702,
    PubSubDiagnosticsType_Counters_StateOperationalByParent_Active = 19703,
    PubSubDiagnosticsType_Counters_StateOperationalByParent_Classification = 19704,
    PubSubDiagnosticsType_Counters_StateOperationalByParent_DiagnosticsLevel = 19705,
    PubSubDiagnosticsType_Counters_StateOperationalByParent_TimeFirstChange = 19706,
    PubSubDiagnosticsType_Counters_StateOperationalFromError = 19707,
    PubSubDiagnosticsType_Counters_StateOperationalFromError_Active = 19708,
    PubSubDiagnosticsType_Counters_StateOperationalFromError_Classification = 19709,
    PubSubDiagnosticsType_Counters_StateOperationalFromError_DiagnosticsLevel = 19710,
    PubSubDiagnosticsType_Counters_StateOperationalFromError_TimeFirstChange = 19711,
    PubSubDiagnosticsType_Counters_StatePausedByParent = 19712,
    PubSubDiagnosticsType_Counters_StatePausedByParent_Active = 19713,
    PubSubDiagnosticsType_Counters_StatePausedByParent_Classification = 19714,
    PubSubDiagnosticsType_Counters_StatePausedByParent_DiagnosticsLevel = 19715,
    PubSubDiagnosticsType_Counters_StatePausedByParent_TimeFirstChange = 19716,
    PubSubDiagnosticsType_Counters_StateDisabledByMethod = 19717,
    PubSubDiagnosticsType_Counters_StateDisabledByMethod_Active = 19718,
    PubSubDiagnosticsType_Counters_StateDisabledByMethod_Classification = 19719,
    PubSubDiagnosticsType_Counters_StateDisabledByMethod_DiagnosticsLevel = 19720,
    PubSubDiagnosticsType_Counters_StateDisabledByMethod_TimeFirstChange = 19721,
    PubSubDiagnosticsType_LiveValues = 19722,
    DiagnosticsLevel = 19723,
    DiagnosticsLevel_EnumStrings = 19724,
    PubSubDiagnosticsCounterType = 19725,
    PubSubDiagnosticsCounterType_Active = 19726,
    PubSubDiagnosticsCounterType_Classification = 19727,
    PubSubDiagnosticsCounterType_DiagnosticsLevel = 19728,
    PubSubDiagnosticsCounterType_TimeFirstChange = 19729,
    PubSubDiagnosticsCounterClassification = 19730,
    PubSubDiagnosticsCounterClassification_EnumStrings = 19731,
    PubSubDiagnosticsRootType = 19732,
    PubSubDiagnosticsRootType_DiagnosticsLevel = 19733,
    PubSubDiagnosticsRootType_TotalInformation = 19734,
    PubSubDiagnosticsRootType_TotalInformation_Active = 19735,
    PubSubDiagnosticsRootType_TotalInformation_Classification = 19736,
    PubSubDiagnosticsRootType_TotalInformation_DiagnosticsLevel = 19737,
    PubSubDiagnosticsRootType_TotalInformation_TimeFirstChange = 19738,
    PubSubDiagnosticsRootType_TotalError = 19739,
    PubSubDiagnosticsRootType_TotalError_Active = 19740,
    PubSubDiagnosticsRootType_TotalError_Classification = 19741,
    PubSubDiagnosticsRootType_TotalError_DiagnosticsLevel = 19742,
    PubSubDiagnosticsRootType_TotalError_TimeFirstChange = 19743,
    PubSubDiagnosticsRootType_Reset = 19744,
    PubSubDiagnosticsRootType_SubError = 19745,
    PubSubDiagnosticsRootType_Counters = 19746,
    PubSubDiagnosticsRootType_Counters_StateError = 19747,
    PubSubDiagnosticsRootType_Counters_StateError_Active = 19748,
    PubSubDiagnosticsRootType_Counters_StateError_Classification = 19749,
    PubSubDiagnosticsRootType_Counters_StateError_DiagnosticsLevel = 19750,
    PubSubDiagnosticsRootType_Counters_StateError_TimeFirstChange = 19751,
    PubSubDiagnosticsRootType_Counters_StateOperationalByMethod = 19752,
    PubSubDiagnosticsRootType_Counters_StateOperationalByMethod_Active = 19753,
    PubSubDiagnosticsRootType_Counters_StateOperationalByMethod_Classification = 19754,
    PubSubDiagnosticsRootType_Counters_StateOperationalByMethod_DiagnosticsLevel = 19755,
    PubSubDiagnosticsRootType_Counters_StateOperationalByMethod_TimeFirstChange = 19756,
    PubSubDiagnosticsRootType_Counters_StateOperationalByParent = 19757,
    PubSubDiagnosticsRootType_Counters_StateOperationalByParent_Active = 19758,
    PubSubDiagnosticsRootType_Counters_StateOperationalByParent_Classification = 19759,
    PubSubDiagnosticsRootType_Counters_StateOperationalByParent_DiagnosticsLevel = 19760,
    PubSubDiagnosticsRootType_Counters_StateOperationalByParent_TimeFirstChange = 19761,
    PubSubDiagnosticsRootType_Counters_StateOperationalFromError = 19762,
    PubSubDiagnosticsRootType_Counters_StateOperationalFromError_Active = 19763,
    PubSubDiagnosticsRootType_Counters_StateOperationalFromError_Classification = 19764,
    PubSubDiagnosticsRootType_Counters_StateOperationalFromError_DiagnosticsLevel = 19765,
    PubSubDiagnosticsRootType_Counters_StateOperationalFromError_TimeFirstChange = 19766,
    PubSubDiagnosticsRootType_Counters_StatePausedByParent = 19767,
    PubSubDiagnosticsRootType_Counters_StatePausedByParent_Active = 19768,
    PubSubDiagnosticsRootType_Counters_StatePausedByParent_Classification = 19769,
    PubSubDiagnosticsRootType_Counters_StatePausedByParent_DiagnosticsLevel = 19770,
    PubSubDiagnosticsRootType_Counters_StatePausedByParent_TimeFirstChange = 19771,
    PubSubDiagnosticsRootType_Counters_StateDisabledByMethod = 19772,
    PubSubDiagnosticsRootType_Counters_StateDisabledByMethod_Active = 19773,
    PubSubDiagnosticsRootType_Counters_StateDisabledByMethod_Classification = 19774,
    PubSubDiagnosticsRootType_Counters_StateDisabledByMethod_DiagnosticsLevel = 19775,
    PubSubDiagnosticsRootType_Counters_StateDisabledByMethod_TimeFirstChange = 19776,
    PubSubDiagnosticsRootType_LiveValues = 19777,
    PubSubDiagnosticsRootType_LiveValues_ConfiguredDataSetWriters = 19778,
    PubSubDiagnosticsRootType_LiveValues_ConfiguredDataSetWriters_DiagnosticsLevel = 19779,
    PubSubDiagnosticsRootType_LiveValues_ConfiguredDataSetReaders = 19780,
    PubSubDiagnosticsRootType_LiveValues_ConfiguredDataSetReaders_DiagnosticsLevel = 19781,
    PubSubDiagnosticsRootType_LiveValues_OperationalDataSetWriters = 19782,
    PubSubDiagnosticsRootType_LiveValues_OperationalDataSetWriters_DiagnosticsLevel = 19783,
    PubSubDiagnosticsRootType_LiveValues_OperationalDataSetReaders = 19784,
    PubSubDiagnosticsRootType_LiveValues_OperationalDataSetReaders_DiagnosticsLevel = 19785,
    PubSubDiagnosticsConnectionType = 19786,
    PubSubDiagnosticsConnectionType_DiagnosticsLevel = 19787,
    PubSubDiagnosticsConnectionType_TotalInformation = 19788,
    PubSubDiagnosticsConnectionType_TotalInformation_Active = 19789,
    PubSubDiagnosticsConnectionType_TotalInformation_Classification = 19790,
    PubSubDiagnosticsConnectionType_TotalInformation_DiagnosticsLevel = 19791,
    PubSubDiagnosticsConnectionType_TotalInformation_TimeFirstChange = 19792,
    PubSubDiagnosticsConnectionType_TotalError = 19793,
    PubSubDiagnosticsConnectionType_TotalError_Active = 19794,
    PubSubDiagnosticsConnectionType_TotalError_Classification = 19795,
    PubSubDiagnosticsConnectionType_TotalError_DiagnosticsLevel = 19796,
    PubSubDiagnosticsConnectionType_TotalError_TimeFirstChange = 19797,
    PubSubDiagnosticsConnectionType_Reset = 19798,
    PubSubDiagnosticsConnectionType_SubError = 19799,
    PubSubDiagnosticsConnectionType_Counters = 19800,
    PubSubDiagnosticsConnectionType_Counters_StateError = 19801,
    PubSubDiagnosticsConnectionType_Counters_StateError_Active = 19802,
    PubSubDiagnosticsConnectionType_Counters_StateError_Classification = 19803,
    PubSubDiagnosticsConnectionType_Counters_StateError_DiagnosticsLevel = 19804,
    PubSubDiagnosticsConnectionType_Counters_StateError_TimeFirstChange = 19805,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByMethod = 19806,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByMethod_Active = 19807,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByMethod_Classification = 19808,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByMethod_DiagnosticsLevel = 19809,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByMethod_TimeFirstChange = 19810,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByParent = 19811,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByParent_Active = 19812,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByParent_Classification = 19813,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByParent_DiagnosticsLevel = 19814,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalByParent_TimeFirstChange = 19815,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalFromError = 19816,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalFromError_Active = 19817,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalFromError_Classification = 19818,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalFromError_DiagnosticsLevel = 19819,
    PubSubDiagnosticsConnectionType_Counters_StateOperationalFromError_TimeFirstChange = 19820,
    PubSubDiagnosticsConnectionType_Counters_StatePausedByParent = 19821,
    PubSubDiagnosticsConnectionType_Counters_StatePausedByParent_Active = 19822,
    PubSubDiagnosticsConnectionType_Counters_StatePausedByParent_Classification = 19823,
    PubSubDiagnosticsConnectionType_Counters_StatePausedByParent_DiagnosticsLevel = 19824,
    PubSubDiagnosticsConnectionType_Counters_StatePausedByParent_TimeFirstChange = 19825,
    PubSubDiagnosticsConnectionType_Counters_StateDisabledByMethod = 19826,
    PubSubDiagnosticsConnectionType_Counters_StateDisabledByMethod_Active = 19827,
    PubSubDiagnosticsConnectionType_Counters_StateDisabledByMethod_Classification = 19828,
    PubSubDiagnosticsConnectionType_Counters_StateDisabledByMethod_DiagnosticsLevel = 19829,
    PubSubDiagnosticsConnectionType_Counters_StateDisabledByMethod_TimeFirstChange = 19830,
    PubSubDiagnosticsConnectionType_LiveValues = 19831,
    PubSubDiagnosticsConnectionType_LiveValues_ResolvedAddress = 19832,
    PubSubDiagnosticsConnectionType_LiveValues_ResolvedAddress_DiagnosticsLevel = 19833,
    PubSubDiagnosticsWriterGroupType = 19834,
    PubSubDiagnosticsWriterGroupType_DiagnosticsLevel = 19835,
    PubSubDiagnosticsWriterGroupType_TotalInformation = 19836,
    PubSubDiagnosticsWriterGroupType_TotalInformation_Active = 19837,
    PubSubDiagnosticsWriterGroupType_TotalInformation_Classification = 19838,
    PubSubDiagnosticsWriterGroupType_TotalInformation_DiagnosticsLevel = 19839,
    PubSubDiagnosticsWriterGroupType_TotalInformation_TimeFirstChange = 19840,
    PubSubDiagnosticsWriterGroupType_TotalError = 19841,
    PubSubDiagnosticsWriterGroupType_TotalError_Active = 19842,
    PubSubDiagnosticsWriterGroupType_TotalError_Classification = 19843,
    PubSubDiagnosticsWriterGroupType_TotalError_DiagnosticsLevel = 19844,
    PubSubDiagnosticsWriterGroupType_TotalError_TimeFirstChange = 19845,
    PubSubDiagnosticsWriterGroupType_Reset = 19846,
    PubSubDiagnosticsWriterGroupType_SubError = 19847,
    PubSubDiagnosticsWriterGroupType_Counters = 19848,
    PubSubDiagnosticsWriterGroupType_Counters_StateError = 19849,
    PubSubDiagnosticsWriterGroupType_Counters_StateError_Active = 19850,
    PubSubDiagnosticsWriterGroupType_Counters_StateError_Classification = 19851,
    PubSubDiagnosticsWriterGroupType_Counters_StateError_DiagnosticsLevel = 19852,
    PubSubDiagnosticsWriterGroupType_Counters_StateError_TimeFirstChange = 19853,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByMethod = 19854,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByMethod_Active = 19855,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByMethod_Classification = 19856,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByMethod_DiagnosticsLevel = 19857,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByMethod_TimeFirstChange = 19858,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByParent = 19859,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByParent_Active = 19860,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByParent_Classification = 19861,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByParent_DiagnosticsLevel = 19862,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalByParent_TimeFirstChange = 19863,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalFromError = 19864,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalFromError_Active = 19865,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalFromError_Classification = 19866,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalFromError_DiagnosticsLevel = 19867,
    PubSubDiagnosticsWriterGroupType_Counters_StateOperationalFromError_TimeFirstChange = 19868,
    PubSubDiagnosticsWriterGroupType_Counters_StatePausedByParent = 19869,
    PubSubDiagnosticsWriterGroupType_Counters_StatePausedByParent_Active = 19870,
    PubSubDiagnosticsWriterGroupType_Counters_StatePausedByParent_Classification = 19871,
    PubSubDiagnosticsWriterGroupType_Counters_StatePausedByParent_DiagnosticsLevel = 19872,
    PubSubDiagnosticsWriterGroupType_Counters_StatePausedByParent_TimeFirstChange = 19873,
    PubSubDiagnosticsWriterGroupType_Counters_StateDisabledByMethod = 19874,
    PubSubDiagnosticsWriterGroupType_Counters_StateDisabledByMethod_Active = 19875,
    PubSubDiagnosticsWriterGroupType_Counters_StateDisabledByMethod_Classification = 19876,
    PubSubDiagnosticsWriterGroupType_Counters_StateDisabledByMethod_DiagnosticsLevel = 19877,
    PubSubDiagnosticsWriterGroupType_Counters_StateDisabledByMethod_TimeFirstChange = 19878,
    PubSubDiagnosticsWriterGroupType_LiveValues = 19879,
    PubSubDiagnosticsWriterGroupType_Counters_SentNetworkMessages = 19880,
    PubSubDiagnosticsWriterGroupType_Counters_SentNetworkMessages_Active = 19881,
    PubSubDiagnosticsWriterGroupType_Counters_SentNetworkMessages_Classification = 19882,
    PubSubDiagnosticsWriterGroupType_Counters_SentNetworkMessages_DiagnosticsLevel = 19883,
    PubSubDiagnosticsWriterGroupType_Counters_SentNetworkMessages_TimeFirstChange = 19884,
    PubSubDiagnosticsWriterGroupType_Counters_FailedTransmissions = 19885,
    PubSubDiagnosticsWriterGroupType_Counters_FailedTransmissions_Active = 19886,
    PubSubDiagnosticsWriterGroupType_Counters_FailedTransmissions_Classification = 19887,
    PubSubDiagnosticsWriterGroupType_Counters_FailedTransmissions_DiagnosticsLevel = 19888,
    PubSubDiagnosticsWriterGroupType_Counters_FailedTransmissions_TimeFirstChange = 19889,
    PubSubDiagnosticsWriterGroupType_Counters_EncryptionErrors = 19890,
    PubSubDiagnosticsWriterGroupType_Counters_EncryptionErrors_Active = 19891,
    PubSubDiagnosticsWriterGroupType_Counters_EncryptionErrors_Classification = 19892,
    PubSubDiagnosticsWriterGroupType_Counters_EncryptionErrors_DiagnosticsLevel = 19893,
    PubSubDiagnosticsWriterGroupType_Counters_EncryptionErrors_TimeFirstChange = 19894,
    PubSubDiagnosticsWriterGroupType_LiveValues_ConfiguredDataSetWriters = 19895,
    PubSubDiagnosticsWriterGroupType_LiveValues_ConfiguredDataSetWriters_DiagnosticsLevel = 19896,
    PubSubDiagnosticsWriterGroupType_LiveValues_OperationalDataSetWriters = 19897,
    PubSubDiagnosticsWriterGroupType_LiveValues_OperationalDataSetWriters_DiagnosticsLevel = 19898,
    PubSubDiagnosticsWriterGroupType_LiveValues_SecurityTokenID = 19899,
    PubSubDiagnosticsWriterGroupType_LiveValues_SecurityTokenID_DiagnosticsLevel = 19900,
    PubSubDiagnosticsWriterGroupType_LiveValues_TimeToNextTokenID = 19901,
    PubSubDiagnosticsWriterGroupType_LiveValues_TimeToNextTokenID_DiagnosticsLevel = 19902,
    PubSubDiagnosticsReaderGroupType = 19903,
    PubSubDiagnosticsReaderGroupType_DiagnosticsLevel = 19904,
    PubSubDiagnosticsReaderGroupType_TotalInformation = 19905,
    PubSubDiagnosticsReaderGroupType_TotalInformation_Active = 19906,
    PubSubDiagnosticsReaderGroupType_TotalInformation_Classification = 19907,
    PubSubDiagnosticsReaderGroupType_TotalInformation_DiagnosticsLevel = 19908,
    PubSubDiagnosticsReaderGroupType_TotalInformation_TimeFirstChange = 19909,
    PubSubDiagnosticsReaderGroupType_TotalError = 19910,
    PubSubDiagnosticsReaderGroupType_TotalError_Active = 19911,
    PubSubDiagnosticsReaderGroupType_TotalError_Classification = 19912,
    PubSubDiagnosticsReaderGroupType_TotalError_DiagnosticsLevel = 19913,
    PubSubDiagnosticsReaderGroupType_TotalError_TimeFirstChange = 19914,
    PubSubDiagnosticsReaderGroupType_Reset = 19915,
    PubSubDiagnosticsReaderGroupType_SubError = 19916,
    PubSubDiagnosticsReaderGroupType_Counters = 19917,
    PubSubDiagnosticsReaderGroupType_Counters_StateError = 19918,
    PubSubDiagnosticsReaderGroupType_Counters_StateError_Active = 19919,
    PubSubDiagnosticsReaderGroupType_Counters_StateError_Classification = 19920,
    PubSubDiagnosticsReaderGroupType_Counters_StateError_DiagnosticsLevel = 19921,
    PubSubDiagnosticsReaderGroupType_Counters_StateError_TimeFirstChange = 19922,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByMethod = 19923,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByMethod_Active = 19924,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByMethod_Classification = 19925,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByMethod_DiagnosticsLevel = 19926,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByMethod_TimeFirstChange = 19927,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByParent = 19928,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByParent_Active = 19929,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByParent_Classification = 19930,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByParent_DiagnosticsLevel = 19931,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalByParent_TimeFirstChange = 19932,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalFromError = 19933,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalFromError_Active = 19934,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalFromError_Classification = 19935,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalFromError_DiagnosticsLevel = 19936,
    PubSubDiagnosticsReaderGroupType_Counters_StateOperationalFromError_TimeFirstChange = 19937,
    PubSubDiagnosticsReaderGroupType_Counters_StatePausedByParent = 19938,
    PubSubDiagnosticsReaderGroupType_Counters_StatePausedByParent_Active = 19939,
    PubSubDiagnosticsReaderGroupType_Counters_StatePausedByParent_Classification = 19940,
    PubSubDiagnosticsReaderGroupType_Counters_StatePausedByParent_DiagnosticsLevel = 19941,
    PubSubDiagnosticsReaderGroupType_Counters_StatePausedByParent_TimeFirstChange = 19942,
    PubSubDiagnosticsReaderGroupType_Counters_StateDisabledByMethod = 19943,
    PubSubDiagnosticsReaderGroupType_Counters_StateDisabledByMethod_Active = 19944,
    PubSubDiagnosticsReaderGroupType_Counters_StateDisabledByMethod_Classification = 19945,
    PubSubDiagnosticsReaderGroupType_Counters_StateDisabledByMethod_DiagnosticsLevel = 19946,
    PubSubDiagnosticsReaderGroupType_Counters_StateDisabledByMethod_TimeFirstChange = 19947,
    PubSubDiagnosticsReaderGroupType_LiveValues = 19948,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedNetworkMessages = 19949,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedNetworkMessages_Active = 19950,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedNetworkMessages_Classification = 19951,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedNetworkMessages_DiagnosticsLevel = 19952,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedNetworkMessages_TimeFirstChange = 19953,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedInvalidNetworkMessages = 19954,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedInvalidNetworkMessages_Active = 19955,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedInvalidNetworkMessages_Classification = 19956,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedInvalidNetworkMessages_DiagnosticsLevel = 19957,
    PubSubDiagnosticsReaderGroupType_Counters_ReceivedInvalidNetworkMessages_TimeFirstChange = 19958,
    PubSubDiagnosticsReaderGroupType_Counters_DecryptionErrors = 19959,
    PubSubDiagnosticsReaderGroupType_Counters_DecryptionErrors_Active = 19960,
    PubSubDiagnosticsReaderGroupType_Counters_DecryptionErrors_Classification = 19961,
    PubSubDiagnosticsReaderGroupType_Counters_DecryptionErrors_DiagnosticsLevel = 19962,
    PubSubDiagnosticsReaderGroupType_Counters_DecryptionErrors_TimeFirstChange = 19963,
    PubSubDiagnosticsReaderGroupType_LiveValues_ConfiguredDataSetReaders = 19964,
    PubSubDiagnosticsReaderGroupType_LiveValues_ConfiguredDataSetReaders_DiagnosticsLevel = 19965,
    PubSubDiagnosticsReaderGroupType_LiveValues_OperationalDataSetReaders = 19966,
    PubSubDiagnosticsReaderGroupType_LiveValues_OperationalDataSetReaders_DiagnosticsLevel = 19967,
    PubSubDiagnosticsDataSetWriterType = 19968,
    PubSubDiagnosticsDataSetWriterType_DiagnosticsLevel = 19969,
    PubSubDiagnosticsDataSetWriterType_TotalInformation = 19970,
    PubSubDiagnosticsDataSetWriterType_TotalInformation_Active = 19971,
    PubSubDiagnosticsDataSetWriterType_TotalInformation_Classification = 19972,
    PubSubDiagnosticsDataSetWriterType_TotalInformation_DiagnosticsLevel = 19973,
    PubSubDiagnosticsDataSetWriterType_TotalInformation_TimeFirstChange = 19974,
    PubSubDiagnosticsDataSetWriterType_TotalError = 19975,
    PubSubDiagnosticsDataSetWriterType_TotalError_Active = 19976,
    PubSubDiagnosticsDataSetWriterType_TotalError_Classification = 19977,
    PubSubDiagnosticsDataSetWriterType_TotalError_DiagnosticsLevel = 19978,
    PubSubDiagnosticsDataSetWriterType_TotalError_TimeFirstChange = 19979,
    PubSubDiagnosticsDataSetWriterType_Reset = 19980,
    PubSubDiagnosticsDataSetWriterType_SubError = 19981,
    PubSubDiagnosticsDataSetWriterType_Counters = 19982,
    PubSubDiagnosticsDataSetWriterType_Counters_StateError = 19983,
    PubSubDiagnosticsDataSetWriterType_Counters_StateError_Active = 19984,
    PubSubDiagnosticsDataSetWriterType_Counters_StateError_Classification = 19985,
    PubSubDiagnosticsDataSetWriterType_Counters_StateError_DiagnosticsLevel = 19986,
    PubSubDiagnosticsDataSetWriterType_Counters_StateError_TimeFirstChange = 19987,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByMethod = 19988,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByMethod_Active = 19989,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByMethod_Classification = 19990,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByMethod_DiagnosticsLevel = 19991,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByMethod_TimeFirstChange = 19992,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByParent = 19993,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByParent_Active = 19994,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByParent_Classification = 19995,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByParent_DiagnosticsLevel = 19996,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalByParent_TimeFirstChange = 19997,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalFromError = 19998,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalFromError_Active = 19999,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalFromError_Classification = 20000,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalFromError_DiagnosticsLevel = 20001,
    PubSubDiagnosticsDataSetWriterType_Counters_StateOperationalFromError_TimeFirstChange = 20002,
    PubSubDiagnosticsDataSetWriterType_Counters_StatePausedByParent = 20003,
    PubSubDiagnosticsDataSetWriterType_Counters_StatePausedByParent_Active = 20004,
    PubSubDiagnosticsDataSetWriterType_Counters_StatePausedByParent_Classification = 20005,
    PubSubDiagnosticsDataSetWriterType_Counters_StatePausedByParent_DiagnosticsLevel = 20006,
    PubSubDiagnosticsDataSetWriterType_Counters_StatePausedByParent_TimeFirstChange = 20007,
    PubSubDiagnosticsDataSetWriterType_Counters_StateDisabledByMethod = 20008,
    PubSubDiagnosticsDataSetWriterType_Counters_StateDisabledByMethod_Active = 20009,
    PubSubDiagnosticsDataSetWriterType_Counters_StateDisabledByMethod_Classification = 20010,
    PubSubDiagnosticsDataSetWriterType_Counters_StateDisabledByMethod_DiagnosticsLevel = 20011,
    PubSubDiagnosticsDataSetWriterType_Counters_StateDisabledByMethod_TimeFirstChange = 20012,
    PubSubDiagnosticsDataSetWriterType_LiveValues = 20013,
    PubSubDiagnosticsDataSetWriterType_Counters_FailedDataSetMessages = 20014,
    PubSubDiagnosticsDataSetWriterType_Counters_FailedDataSetMessages_Active = 20015,
    PubSubDiagnosticsDataSetWriterType_Counters_FailedDataSetMessages_Classification = 20016,
    PubSubDiagnosticsDataSetWriterType_Counters_FailedDataSetMessages_DiagnosticsLevel = 20017,
    PubSubDiagnosticsDataSetWriterType_Counters_FailedDataSetMessages_TimeFirstChange = 20018,
    PubSubDiagnosticsDataSetWriterType_LiveValues_MessageSequenceNumber = 20019,
    PubSubDiagnosticsDataSetWriterType_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 20020,
    PubSubDiagnosticsDataSetWriterType_LiveValues_StatusCode = 20021,
    PubSubDiagnosticsDataSetWriterType_LiveValues_StatusCode_DiagnosticsLevel = 20022,
    PubSubDiagnosticsDataSetWriterType_LiveValues_MajorVersion = 20023,
    PubSubDiagnosticsDataSetWriterType_LiveValues_MajorVersion_DiagnosticsLevel = 20024,
    PubSubDiagnosticsDataSetWriterType_LiveValues_MinorVersion = 20025,
    PubSubDiagnosticsDataSetWriterType_LiveValues_MinorVersion_DiagnosticsLevel = 20026,
    PubSubDiagnosticsDataSetReaderType = 20027,
    PubSubDiagnosticsDataSetReaderType_DiagnosticsLevel = 20028,
    PubSubDiagnosticsDataSetReaderType_TotalInformation = 20029,
    PubSubDiagnosticsDataSetReaderType_TotalInformation_Active = 20030,
    PubSubDiagnosticsDataSetReaderType_TotalInformation_Classification = 20031,
    PubSubDiagnosticsDataSetReaderType_TotalInformation_DiagnosticsLevel = 20032,
    PubSubDiagnosticsDataSetReaderType_TotalInformation_TimeFirstChange = 20033,
    PubSubDiagnosticsDataSetReaderType_TotalError = 20034,
    PubSubDiagnosticsDataSetReaderType_TotalError_Active = 20035,
    PubSubDiagnosticsDataSetReaderType_TotalError_Classification = 20036,
    PubSubDiagnosticsDataSetReaderType_TotalError_DiagnosticsLevel = 20037,
    PubSubDiagnosticsDataSetReaderType_TotalError_TimeFirstChange = 20038,
    PubSubDiagnosticsDataSetReaderType_Reset = 20039,
    PubSubDiagnosticsDataSetReaderType_SubError = 20040,
    PubSubDiagnosticsDataSetReaderType_Counters = 20041,
    PubSubDiagnosticsDataSetReaderType_Counters_StateError = 20042,
    PubSubDiagnosticsDataSetReaderType_Counters_StateError_Active = 20043,
    PubSubDiagnosticsDataSetReaderType_Counters_StateError_Classification = 20044,
    PubSubDiagnosticsDataSetReaderType_Counters_StateError_DiagnosticsLevel = 20045,
    PubSubDiagnosticsDataSetReaderType_Counters_StateError_TimeFirstChange = 20046,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByMethod = 20047,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByMethod_Active = 20048,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByMethod_Classification = 20049,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByMethod_DiagnosticsLevel = 20050,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByMethod_TimeFirstChange = 20051,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByParent = 20052,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByParent_Active = 20053,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByParent_Classification = 20054,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByParent_DiagnosticsLevel = 20055,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalByParent_TimeFirstChange = 20056,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalFromError = 20057,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalFromError_Active = 20058,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalFromError_Classification = 20059,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalFromError_DiagnosticsLevel = 20060,
    PubSubDiagnosticsDataSetReaderType_Counters_StateOperationalFromError_TimeFirstChange = 20061,
    PubSubDiagnosticsDataSetReaderType_Counters_StatePausedByParent = 20062,
    PubSubDiagnosticsDataSetReaderType_Counters_StatePausedByParent_Active = 20063,
    PubSubDiagnosticsDataSetReaderType_Counters_StatePausedByParent_Classification = 20064,
    PubSubDiagnosticsDataSetReaderType_Counters_StatePausedByParent_DiagnosticsLevel = 20065,
    PubSubDiagnosticsDataSetReaderType_Counters_StatePausedByParent_TimeFirstChange = 20066,
    PubSubDiagnosticsDataSetReaderType_Counters_StateDisabledByMethod = 20067,
    PubSubDiagnosticsDataSetReaderType_Counters_StateDisabledByMethod_Active = 20068,
    PubSubDiagnosticsDataSetReaderType_Counters_StateDisabledByMethod_Classification = 20069,
    PubSubDiagnosticsDataSetReaderType_Counters_StateDisabledByMethod_DiagnosticsLevel = 20070,
    PubSubDiagnosticsDataSetReaderType_Counters_StateDisabledByMethod_TimeFirstChange = 20071,
    PubSubDiagnosticsDataSetReaderType_LiveValues = 20072,
    PubSubDiagnosticsDataSetReaderType_Counters_FailedDataSetMessages = 20073,
    PubSubDiagnosticsDataSetReaderType_Counters_FailedDataSetMessages_Active = 20074,
    PubSubDiagnosticsDataSetReaderType_Counters_FailedDataSetMessages_Classification = 20075,
    PubSubDiagnosticsDataSetReaderType_Counters_FailedDataSetMessages_DiagnosticsLevel = 20076,
    PubSubDiagnosticsDataSetReaderType_Counters_FailedDataSetMessages_TimeFirstChange = 20077,
    PubSubDiagnosticsDataSetReaderType_Counters_DecryptionErrors = 20078,
    PubSubDiagnosticsDataSetReaderType_Counters_DecryptionErrors_Active = 20079,
    PubSubDiagnosticsDataSetReaderType_Counters_DecryptionErrors_Classification = 20080,
    PubSubDiagnosticsDataSetReaderType_Counters_DecryptionErrors_DiagnosticsLevel = 20081,
    PubSubDiagnosticsDataSetReaderType_Counters_DecryptionErrors_TimeFirstChange = 20082,
    PubSubDiagnosticsDataSetReaderType_LiveValues_MessageSequenceNumber = 20083,
    PubSubDiagnosticsDataSetReaderType_LiveValues_MessageSequenceNumber_DiagnosticsLevel = 20084,
    PubSubDiagnosticsDataSetReaderType_LiveValues_StatusCode = 20085,
    PubSubDiagnosticsDataSetReaderType_LiveValues_StatusCode_DiagnosticsLevel = 20086,
    PubSubDiagnosticsDataSetReaderType_LiveValues_MajorVersion = 20087,
    PubSubDiagnosticsDataSetReaderType_LiveValues_MajorVersion_DiagnosticsLevel = 20088,
    PubSubDiagnosticsDataSetReaderType_LiveValues_MinorVersion = 20089,
    PubSubDiagnosticsDataSetReaderType_LiveValues_MinorVersion_DiagnosticsLevel = 20090,
    PubSubDiagnosticsDataSetReaderType_LiveValues_SecurityTokenID = 20091,
    PubSubDiagnosticsDataSetReaderType_LiveValues_SecurityTokenID_DiagnosticsLevel = 20092,
    PubSubDiagnosticsDataSetReaderType_LiveValues_TimeToNextTokenID = 20093,
    PubSubDiagnosticsDataSetReaderType_LiveValues_TimeToNextTokenID_DiagnosticsLevel = 20094,
    CertificateGroupType_CertificateExpired_ShelvingState_AvailableTransitions = 20095,
    CertificateGroupType_CertificateExpired_ShelvingState_UnshelveTime = 20096,
    CertificateGroupType_CertificateExpired_ShelvingState_TimedShelve = 20097,
    CertificateGroupType_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 20098,
    CertificateGroupType_CertificateExpired_ShelvingState_Unshelve = 20099,
    CertificateGroupType_CertificateExpired_ShelvingState_OneShotShelve = 20100,
    CertificateGroupType_CertificateExpired_SuppressedOrShelved = 20101,
    CertificateGroupType_CertificateExpired_MaxTimeShelved = 20102,
    CertificateGroupType_CertificateExpired_AudibleEnabled = 20103,
    CertificateGroupType_CertificateExpired_AudibleSound = 20104,
    CertificateGroupType_CertificateExpired_AudibleSound_ListId = 20105,
    CertificateGroupType_CertificateExpired_AudibleSound_AgencyId = 20106,
    CertificateGroupType_CertificateExpired_AudibleSound_VersionId = 20107,
    CertificateGroupType_CertificateExpired_SilenceState = 20108,
    CertificateGroupType_CertificateExpired_SilenceState_Id = 20109,
    CertificateGroupType_CertificateExpired_SilenceState_Name = 20110,
    CertificateGroupType_CertificateExpired_SilenceState_Number = 20111,
    CertificateGroupType_CertificateExpired_SilenceState_EffectiveDisplayName = 20112,
    CertificateGroupType_CertificateExpired_SilenceState_TransitionTime = 20113,
    CertificateGroupType_CertificateExpired_SilenceState_EffectiveTransitionTime = 20114,
    CertificateGroupType_CertificateExpired_SilenceState_TrueState = 20115,
    CertificateGroupType_CertificateExpired_SilenceState_FalseState = 20116,
    CertificateGroupType_CertificateExpired_OnDelay = 20117,
    CertificateGroupType_CertificateExpired_OffDelay = 20118,
    CertificateGroupType_CertificateExpired_FirstInGroupFlag = 20119,
    CertificateGroupType_CertificateExpired_FirstInGroup = 20120,
    CertificateGroupType_CertificateExpired_LatchedState = 20121,
    CertificateGroupType_CertificateExpired_LatchedState_Id = 20122,
    CertificateGroupType_CertificateExpired_LatchedState_Name = 20123,
    CertificateGroupType_CertificateExpired_LatchedState_Number = 20124,
    CertificateGroupType_CertificateExpired_LatchedState_EffectiveDisplayName = 20125,
    CertificateGroupType_CertificateExpired_LatchedState_TransitionTime = 20126,
    CertificateGroupType_CertificateExpired_LatchedState_EffectiveTransitionTime = 20127,
    CertificateGroupType_CertificateExpired_LatchedState_TrueState = 20128,
    CertificateGroupType_CertificateExpired_LatchedState_FalseState = 20129,
    CertificateGroupType_CertificateExpired_ReAlarmTime = 20130,
    CertificateGroupType_CertificateExpired_ReAlarmRepeatCount = 20131,
    CertificateGroupType_CertificateExpired_Silence = 20132,
    CertificateGroupType_CertificateExpired_Suppress = 20133,
    CertificateGroupType_CertificateExpired_Unsuppress = 20134,
    CertificateGroupType_CertificateExpired_RemoveFromService = 20135,
    CertificateGroupType_CertificateExpired_PlaceInService = 20136,
    CertificateGroupType_CertificateExpired_Reset = 20137,
    CertificateGroupType_CertificateExpired_NormalState = 20138,
    CertificateGroupType_CertificateExpired_ExpirationDate = 20139,
    CertificateGroupType_CertificateExpired_ExpirationLimit = 20140,
    CertificateGroupType_CertificateExpired_CertificateType = 20141,
    CertificateGroupType_CertificateExpired_Certificate = 20142,
    CertificateGroupType_TrustListOutOfDate = 20143,
    CertificateGroupType_TrustListOutOfDate_EventId = 20144,
    CertificateGroupType_TrustListOutOfDate_EventType = 20145,
    CertificateGroupType_TrustListOutOfDate_SourceNode = 20146,
    CertificateGroupType_TrustListOutOfDate_SourceName = 20147,
    CertificateGroupType_TrustListOutOfDate_Time = 20148,
    CertificateGroupType_TrustListOutOfDate_ReceiveTime = 20149,
    CertificateGroupType_TrustListOutOfDate_LocalTime = 20150,
    CertificateGroupType_TrustListOutOfDate_Message = 20151,
    CertificateGroupType_TrustListOutOfDate_Severity = 20152,
    CertificateGroupType_TrustListOutOfDate_ConditionClassId = 20153,
    CertificateGroupType_TrustListOutOfDate_ConditionClassName = 20154,
    CertificateGroupType_TrustListOutOfDate_ConditionSubClassId = 20155,
    CertificateGroupType_TrustListOutOfDate_ConditionSubClassName = 20156,
    CertificateGroupType_TrustListOutOfDate_ConditionName = 20157,
    CertificateGroupType_TrustListOutOfDate_BranchId = 20158,
    CertificateGroupType_TrustListOutOfDate_Retain = 20159,
    CertificateGroupType_TrustListOutOfDate_EnabledState = 20160,
    CertificateGroupType_TrustListOutOfDate_EnabledState_Id = 20161,
    CertificateGroupType_TrustListOutOfDate_EnabledState_Name = 20162,
    CertificateGroupType_TrustListOutOfDate_EnabledState_Number = 20163,
    CertificateGroupType_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 20164,
    CertificateGroupType_TrustListOutOfDate_EnabledState_TransitionTime = 20165,
    CertificateGroupType_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 20166,
    CertificateGroupType_TrustListOutOfDate_EnabledState_TrueState = 20167,
    CertificateGroupType_TrustListOutOfDate_EnabledState_FalseState = 20168,
    CertificateGroupType_TrustListOutOfDate_Quality = 20169,
    CertificateGroupType_TrustListOutOfDate_Quality_SourceTimestamp = 20170,
    CertificateGroupType_TrustListOutOfDate_LastSeverity = 20171,
    CertificateGroupType_TrustListOutOfDate_LastSeverity_SourceTimestamp = 20172,
    CertificateGroupType_TrustListOutOfDate_Comment = 20173,
    CertificateGroupType_TrustListOutOfDate_Comment_SourceTimestamp = 20174,
    CertificateGroupType_TrustListOutOfDate_ClientUserId = 20175,
    CertificateGroupType_TrustListOutOfDate_Disable = 20176,
    CertificateGroupType_TrustListOutOfDate_Enable = 20177,
    CertificateGroupType_TrustListOutOfDate_AddComment = 20178,
    CertificateGroupType_TrustListOutOfDate_AddComment_InputArguments = 20179,
    CertificateGroupType_TrustListOutOfDate_AckedState = 20180,
    CertificateGroupType_TrustListOutOfDate_AckedState_Id = 20181,
    CertificateGroupType_TrustListOutOfDate_AckedState_Name = 20182,
    CertificateGroupType_TrustListOutOfDate_AckedState_Number = 20183,
    CertificateGroupType_TrustListOutOfDate_AckedState_EffectiveDisplayName = 20184,
    CertificateGroupType_TrustListOutOfDate_AckedState_TransitionTime = 20185,
    CertificateGroupType_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 20186,
    CertificateGroupType_TrustListOutOfDate_AckedState_TrueState = 20187,
    CertificateGroupType_TrustListOutOfDate_AckedState_FalseState = 20188,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState = 20189,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState_Id = 20190,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState_Name = 20191,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState_Number = 20192,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 20193,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState_TransitionTime = 20194,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 20195,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState_TrueState = 20196,
    CertificateGroupType_TrustListOutOfDate_ConfirmedState_FalseState = 20197,
    CertificateGroupType_TrustListOutOfDate_Acknowledge = 20198,
    CertificateGroupType_TrustListOutOfDate_Acknowledge_InputArguments = 20199,
    CertificateGroupType_TrustListOutOfDate_Confirm = 20200,
    CertificateGroupType_TrustListOutOfDate_Confirm_InputArguments = 20201,
    CertificateGroupType_TrustListOutOfDate_ActiveState = 20202,
    CertificateGroupType_TrustListOutOfDate_ActiveState_Id = 20203,
    CertificateGroupType_TrustListOutOfDate_ActiveState_Name = 20204,
    CertificateGroupType_TrustListOutOfDate_ActiveState_Number = 20205,
    CertificateGroupType_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 20206,
    CertificateGroupType_TrustListOutOfDate_ActiveState_TransitionTime = 20207,
    CertificateGroupType_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 20208,
    CertificateGroupType_TrustListOutOfDate_ActiveState_TrueState = 20209,
    CertificateGroupType_TrustListOutOfDate_ActiveState_FalseState = 20210,
    CertificateGroupType_TrustListOutOfDate_InputNode = 20211,
    CertificateGroupType_TrustListOutOfDate_SuppressedState = 20212,
    CertificateGroupType_TrustListOutOfDate_SuppressedState_Id = 20213,
    CertificateGroupType_TrustListOutOfDate_SuppressedState_Name = 20214,
    CertificateGroupType_TrustListOutOfDate_SuppressedState_Number = 20215,
    CertificateGroupType_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 20216,
    CertificateGroupType_TrustListOutOfDate_SuppressedState_TransitionTime = 20217,
    CertificateGroupType_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 20218,
    CertificateGroupType_TrustListOutOfDate_SuppressedState_TrueState = 20219,
    CertificateGroupType_TrustListOutOfDate_SuppressedState_FalseState = 20220,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState = 20221,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState_Id = 20222,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState_Name = 20223,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState_Number = 20224,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 20225,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState_TransitionTime = 20226,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 20227,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState_TrueState = 20228,
    CertificateGroupType_TrustListOutOfDate_OutOfServiceState_FalseState = 20229,
    CertificateGroupType_TrustListOutOfDate_ShelvingState = 20230,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_CurrentState = 20231,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_CurrentState_Id = 20232,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_CurrentState_Name = 20233,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_CurrentState_Number = 20234,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 20235,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_LastTransition = 20236,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_LastTransition_Id = 20237,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_LastTransition_Name = 20238,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_LastTransition_Number = 20239,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 20240,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 20241,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_AvailableStates = 20242,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_AvailableTransitions = 20243,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_UnshelveTime = 20244,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_TimedShelve = 20245,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 20246,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_Unshelve = 20247,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_OneShotShelve = 20248,
    CertificateGroupType_TrustListOutOfDate_SuppressedOrShelved = 20249,
    CertificateGroupType_TrustListOutOfDate_MaxTimeShelved = 20250,
    CertificateGroupType_TrustListOutOfDate_AudibleEnabled = 20251,
    CertificateGroupType_TrustListOutOfDate_AudibleSound = 20252,
    CertificateGroupType_TrustListOutOfDate_AudibleSound_ListId = 20253,
    CertificateGroupType_TrustListOutOfDate_AudibleSound_AgencyId = 20254,
    CertificateGroupType_TrustListOutOfDate_AudibleSound_VersionId = 20255,
    CertificateGroupType_TrustListOutOfDate_SilenceState = 20256,
    CertificateGroupType_TrustListOutOfDate_SilenceState_Id = 20257,
    CertificateGroupType_TrustListOutOfDate_SilenceState_Name = 20258,
    CertificateGroupType_TrustListOutOfDate_SilenceState_Number = 20259,
    CertificateGroupType_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 20260,
    CertificateGroupType_TrustListOutOfDate_SilenceState_TransitionTime = 20261,
    CertificateGroupType_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 20262,
    CertificateGroupType_TrustListOutOfDate_SilenceState_TrueState = 20263,
    CertificateGroupType_TrustListOutOfDate_SilenceState_FalseState = 20264,
    CertificateGroupType_TrustListOutOfDate_OnDelay = 20265,
    CertificateGroupType_TrustListOutOfDate_OffDelay = 20266,
    CertificateGroupType_TrustListOutOfDate_FirstInGroupFlag = 20267,
    CertificateGroupType_TrustListOutOfDate_FirstInGroup = 20268,
    CertificateGroupType_TrustListOutOfDate_LatchedState = 20269,
    CertificateGroupType_TrustListOutOfDate_LatchedState_Id = 20270,
    CertificateGroupType_TrustListOutOfDate_LatchedState_Name = 20271,
    CertificateGroupType_TrustListOutOfDate_LatchedState_Number = 20272,
    CertificateGroupType_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 20273,
    CertificateGroupType_TrustListOutOfDate_LatchedState_TransitionTime = 20274,
    CertificateGroupType_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 20275,
    CertificateGroupType_TrustListOutOfDate_LatchedState_TrueState = 20276,
    CertificateGroupType_TrustListOutOfDate_LatchedState_FalseState = 20277,
    CertificateGroupType_TrustListOutOfDate_ReAlarmTime = 20278,
    CertificateGroupType_TrustListOutOfDate_ReAlarmRepeatCount = 20279,
    CertificateGroupType_TrustListOutOfDate_Silence = 20280,
    CertificateGroupType_TrustListOutOfDate_Suppress = 20281,
    CertificateGroupType_TrustListOutOfDate_Unsuppress = 20282,
    CertificateGroupType_TrustListOutOfDate_RemoveFromService = 20283,
    CertificateGroupType_TrustListOutOfDate_PlaceInService = 20284,
    CertificateGroupType_TrustListOutOfDate_Reset = 20285,
    CertificateGroupType_TrustListOutOfDate_NormalState = 20286,
    CertificateGroupType_TrustListOutOfDate_TrustListId = 20287,
    CertificateGroupType_TrustListOutOfDate_LastUpdateTime = 20288,
    CertificateGroupType_TrustListOutOfDate_UpdateFrequency = 20289,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_UpdateFrequency = 20290,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired = 20291,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EventId = 20292,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EventType = 20293,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SourceNode = 20294,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SourceName = 20295,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Time = 20296,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ReceiveTime = 20297,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LocalTime = 20298,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Message = 20299,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Severity = 20300,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConditionClassId = 20301,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConditionClassName = 20302,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConditionSubClassId = 20303,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConditionSubClassName = 20304,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConditionName = 20305,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_BranchId = 20306,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Retain = 20307,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState = 20308,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState_Id = 20309,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState_Name = 20310,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState_Number = 20311,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 20312,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState_TransitionTime = 20313,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 20314,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState_TrueState = 20315,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_EnabledState_FalseState = 20316,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Quality = 20317,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Quality_SourceTimestamp = 20318,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LastSeverity = 20319,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LastSeverity_SourceTimestamp = 20320,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Comment = 20321,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Comment_SourceTimestamp = 20322,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ClientUserId = 20323,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Disable = 20324,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Enable = 20325,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AddComment = 20326,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AddComment_InputArguments = 20327,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState = 20328,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState_Id = 20329,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState_Name = 20330,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState_Number = 20331,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState_EffectiveDisplayName = 20332,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState_TransitionTime = 20333,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 20334,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState_TrueState = 20335,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AckedState_FalseState = 20336,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState = 20337,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Id = 20338,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Name = 20339,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Number = 20340,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 20341,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState_TransitionTime = 20342,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 20343,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState_TrueState = 20344,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ConfirmedState_FalseState = 20345,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Acknowledge = 20346,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Acknowledge_InputArguments = 20347,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Confirm = 20348,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Confirm_InputArguments = 20349,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState = 20350,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState_Id = 20351,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState_Name = 20352,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState_Number = 20353,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 20354,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState_TransitionTime = 20355,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 20356,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState_TrueState = 20357,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ActiveState_FalseState = 20358,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_InputNode = 20359,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState = 20360,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState_Id = 20361,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState_Name = 20362,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState_Number = 20363,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 20364,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState_TransitionTime = 20365,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 20366,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState_TrueState = 20367,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedState_FalseState = 20368,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState = 20369,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Id = 20370,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Name = 20371,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Number = 20372,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 20373,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_TransitionTime = 20374,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 20375,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_TrueState = 20376,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_FalseState = 20377,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState = 20378,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState = 20379,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Id = 20380,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Name = 20381,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Number = 20382,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 20383,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition = 20384,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Id = 20385,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Name = 20386,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Number = 20387,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 20388,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 20389,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_AvailableStates = 20390,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_AvailableTransitions = 20391,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_UnshelveTime = 20392,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve = 20393,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 20394,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve = 20395,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve = 20396,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SuppressedOrShelved = 20397,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_MaxTimeShelved = 20398,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AudibleEnabled = 20399,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AudibleSound = 20400,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AudibleSound_ListId = 20401,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AudibleSound_AgencyId = 20402,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_AudibleSound_VersionId = 20403,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState = 20404,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState_Id = 20405,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState_Name = 20406,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState_Number = 20407,
    DataSetOrderingType = 20408,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_SecurityTokenID = 20409,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 20410,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState_TransitionTime = 20411,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 20412,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState_TrueState = 20413,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_SilenceState_FalseState = 20414,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OnDelay = 20415,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_OffDelay = 20416,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_FirstInGroupFlag = 20417,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_FirstInGroup = 20418,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState = 20419,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState_Id = 20420,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState_Name = 20421,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState_Number = 20422,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 20423,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState_TransitionTime = 20424,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 20425,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState_TrueState = 20426,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_LatchedState_FalseState = 20427,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ReAlarmTime = 20428,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ReAlarmRepeatCount = 20429,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Silence = 20430,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Suppress = 20431,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Unsuppress = 20432,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_RemoveFromService = 20433,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_PlaceInService = 20434,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Reset = 20435,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_NormalState = 20436,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ExpirationDate = 20437,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ExpirationLimit = 20438,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_CertificateType = 20439,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Certificate = 20440,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate = 20441,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EventId = 20442,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EventType = 20443,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SourceNode = 20444,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SourceName = 20445,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Time = 20446,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ReceiveTime = 20447,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LocalTime = 20448,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Message = 20449,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Severity = 20450,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConditionClassId = 20451,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConditionClassName = 20452,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConditionSubClassId = 20453,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConditionSubClassName = 20454,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConditionName = 20455,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_BranchId = 20456,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Retain = 20457,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState = 20458,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Id = 20459,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Name = 20460,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Number = 20461,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 20462,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_TransitionTime = 20463,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 20464,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_TrueState = 20465,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_FalseState = 20466,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Quality = 20467,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Quality_SourceTimestamp = 20468,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LastSeverity = 20469,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 20470,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Comment = 20471,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Comment_SourceTimestamp = 20472,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ClientUserId = 20473,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Disable = 20474,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Enable = 20475,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AddComment = 20476,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AddComment_InputArguments = 20477,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState = 20478,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Id = 20479,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Name = 20480,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Number = 20481,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 20482,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState_TransitionTime = 20483,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 20484,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState_TrueState = 20485,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AckedState_FalseState = 20486,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState = 20487,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Id = 20488,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Name = 20489,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Number = 20490,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 20491,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 20492,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 20493,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_TrueState = 20494,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_FalseState = 20495,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Acknowledge = 20496,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Acknowledge_InputArguments = 20497,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Confirm = 20498,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Confirm_InputArguments = 20499,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState = 20500,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Id = 20501,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Name = 20502,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Number = 20503,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 20504,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_TransitionTime = 20505,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 20506,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_TrueState = 20507,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_FalseState = 20508,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_InputNode = 20509,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState = 20510,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Id = 20511,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Name = 20512,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Number = 20513,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 20514,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 20515,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 20516,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_TrueState = 20517,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_FalseState = 20518,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState = 20519,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Id = 20520,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Name = 20521,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Number = 20522,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 20523,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 20524,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 20525,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 20526,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 20527,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState = 20528,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState = 20529,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 20530,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 20531,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 20532,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 20533,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition = 20534,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 20535,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 20536,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 20537,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 20538,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 20539,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 20540,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 20541,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 20542,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 20543,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 20544,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve = 20545,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 20546,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SuppressedOrShelved = 20547,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_MaxTimeShelved = 20548,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AudibleEnabled = 20549,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound = 20550,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_ListId = 20551,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_AgencyId = 20552,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_VersionId = 20553,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState = 20554,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Id = 20555,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Name = 20556,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Number = 20557,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 20558,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_TransitionTime = 20559,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 20560,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_TrueState = 20561,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_FalseState = 20562,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OnDelay = 20563,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_OffDelay = 20564,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_FirstInGroupFlag = 20565,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_FirstInGroup = 20566,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState = 20567,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Id = 20568,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Name = 20569,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Number = 20570,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 20571,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_TransitionTime = 20572,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 20573,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_TrueState = 20574,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_FalseState = 20575,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ReAlarmTime = 20576,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ReAlarmRepeatCount = 20577,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Silence = 20578,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Suppress = 20579,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress = 20580,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService = 20581,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService = 20582,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Reset = 20583,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_NormalState = 20584,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_TrustListId = 20585,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_LastUpdateTime = 20586,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_UpdateFrequency = 20587,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_UpdateFrequency = 20588,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired = 20589,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EventId = 20590,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EventType = 20591,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SourceNode = 20592,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SourceName = 20593,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Time = 20594,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ReceiveTime = 20595,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LocalTime = 20596,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Message = 20597,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Severity = 20598,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConditionClassId = 20599,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConditionClassName = 20600,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConditionSubClassId = 20601,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConditionSubClassName = 20602,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConditionName = 20603,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_BranchId = 20604,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Retain = 20605,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState = 20606,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState_Id = 20607,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState_Name = 20608,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState_Number = 20609,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 20610,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState_TransitionTime = 20611,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 20612,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState_TrueState = 20613,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_EnabledState_FalseState = 20614,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Quality = 20615,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Quality_SourceTimestamp = 20616,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LastSeverity = 20617,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LastSeverity_SourceTimestamp = 20618,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Comment = 20619,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Comment_SourceTimestamp = 20620,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ClientUserId = 20621,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Disable = 20622,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Enable = 20623,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AddComment = 20624,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AddComment_InputArguments = 20625,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState = 20626,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState_Id = 20627,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState_Name = 20628,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState_Number = 20629,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState_EffectiveDisplayName = 20630,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState_TransitionTime = 20631,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 20632,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState_TrueState = 20633,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AckedState_FalseState = 20634,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState = 20635,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Id = 20636,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Name = 20637,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Number = 20638,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 20639,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState_TransitionTime = 20640,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 20641,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState_TrueState = 20642,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ConfirmedState_FalseState = 20643,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Acknowledge = 20644,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Acknowledge_InputArguments = 20645,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Confirm = 20646,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Confirm_InputArguments = 20647,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState = 20648,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState_Id = 20649,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState_Name = 20650,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState_Number = 20651,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 20652,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState_TransitionTime = 20653,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 20654,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState_TrueState = 20655,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ActiveState_FalseState = 20656,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_InputNode = 20657,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState = 20658,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState_Id = 20659,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState_Name = 20660,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState_Number = 20661,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 20662,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState_TransitionTime = 20663,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 20664,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState_TrueState = 20665,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedState_FalseState = 20666,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState = 20667,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Id = 20668,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Name = 20669,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Number = 20670,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 20671,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_TransitionTime = 20672,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 20673,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_TrueState = 20674,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_FalseState = 20675,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState = 20676,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState = 20677,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Id = 20678,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Name = 20679,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Number = 20680,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 20681,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition = 20682,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Id = 20683,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Name = 20684,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Number = 20685,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 20686,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 20687,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_AvailableStates = 20688,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_AvailableTransitions = 20689,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_UnshelveTime = 20690,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve = 20691,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 20692,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve = 20693,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve = 20694,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SuppressedOrShelved = 20695,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_MaxTimeShelved = 20696,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AudibleEnabled = 20697,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AudibleSound = 20698,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AudibleSound_ListId = 20699,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AudibleSound_AgencyId = 20700,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_AudibleSound_VersionId = 20701,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState = 20702,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState_Id = 20703,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState_Name = 20704,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState_Number = 20705,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 20706,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState_TransitionTime = 20707,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 20708,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState_TrueState = 20709,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_SilenceState_FalseState = 20710,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OnDelay = 20711,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_OffDelay = 20712,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_FirstInGroupFlag = 20713,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_FirstInGroup = 20714,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState = 20715,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState_Id = 20716,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState_Name = 20717,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState_Number = 20718,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 20719,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState_TransitionTime = 20720,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 20721,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState_TrueState = 20722,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_LatchedState_FalseState = 20723,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ReAlarmTime = 20724,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ReAlarmRepeatCount = 20725,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Silence = 20726,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Suppress = 20727,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Unsuppress = 20728,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_RemoveFromService = 20729,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_PlaceInService = 20730,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Reset = 20731,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_NormalState = 20732,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ExpirationDate = 20733,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ExpirationLimit = 20734,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_CertificateType = 20735,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Certificate = 20736,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate = 20737,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EventId = 20738,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EventType = 20739,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SourceNode = 20740,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SourceName = 20741,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Time = 20742,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ReceiveTime = 20743,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LocalTime = 20744,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Message = 20745,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Severity = 20746,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConditionClassId = 20747,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConditionClassName = 20748,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConditionSubClassId = 20749,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConditionSubClassName = 20750,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConditionName = 20751,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_BranchId = 20752,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Retain = 20753,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState = 20754,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Id = 20755,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Name = 20756,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Number = 20757,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 20758,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_TransitionTime = 20759,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 20760,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_TrueState = 20761,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_FalseState = 20762,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Quality = 20763,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Quality_SourceTimestamp = 20764,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LastSeverity = 20765,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 20766,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Comment = 20767,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Comment_SourceTimestamp = 20768,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ClientUserId = 20769,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Disable = 20770,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Enable = 20771,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AddComment = 20772,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AddComment_InputArguments = 20773,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState = 20774,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Id = 20775,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Name = 20776,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Number = 20777,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 20778,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState_TransitionTime = 20779,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 20780,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState_TrueState = 20781,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AckedState_FalseState = 20782,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState = 20783,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Id = 20784,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Name = 20785,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Number = 20786,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 20787,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 20788,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 20789,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_TrueState = 20790,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_FalseState = 20791,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Acknowledge = 20792,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Acknowledge_InputArguments = 20793,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Confirm = 20794,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Confirm_InputArguments = 20795,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState = 20796,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Id = 20797,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Name = 20798,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Number = 20799,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 20800,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_TransitionTime = 20801,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 20802,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_TrueState = 20803,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_FalseState = 20804,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_InputNode = 20805,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState = 20806,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Id = 20807,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Name = 20808,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Number = 20809,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 20810,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 20811,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 20812,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_TrueState = 20813,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_FalseState = 20814,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState = 20815,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Id = 20816,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Name = 20817,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Number = 20818,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 20819,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 20820,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 20821,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 20822,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 20823,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState = 20824,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState = 20825,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 20826,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 20827,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 20828,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 20829,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition = 20830,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 20831,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 20832,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 20833,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 20834,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 20835,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 20836,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 20837,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 20838,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 20839,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 20840,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve = 20841,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 20842,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SuppressedOrShelved = 20843,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_MaxTimeShelved = 20844,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AudibleEnabled = 20845,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound = 20846,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_ListId = 20847,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_AgencyId = 20848,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_VersionId = 20849,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState = 20850,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Id = 20851,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Name = 20852,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Number = 20853,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 20854,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_TransitionTime = 20855,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 20856,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_TrueState = 20857,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_FalseState = 20858,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OnDelay = 20859,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_OffDelay = 20860,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_FirstInGroupFlag = 20861,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_FirstInGroup = 20862,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState = 20863,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Id = 20864,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Name = 20865,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Number = 20866,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 20867,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_TransitionTime = 20868,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 20869,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_TrueState = 20870,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_FalseState = 20871,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ReAlarmTime = 20872,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ReAlarmRepeatCount = 20873,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Silence = 20874,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Suppress = 20875,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress = 20876,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService = 20877,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService = 20878,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Reset = 20879,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_NormalState = 20880,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_TrustListId = 20881,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_LastUpdateTime = 20882,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_UpdateFrequency = 20883,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_UpdateFrequency = 20884,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired = 20885,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EventId = 20886,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EventType = 20887,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SourceNode = 20888,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SourceName = 20889,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Time = 20890,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ReceiveTime = 20891,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LocalTime = 20892,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Message = 20893,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Severity = 20894,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConditionClassId = 20895,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConditionClassName = 20896,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConditionSubClassId = 20897,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConditionSubClassName = 20898,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConditionName = 20899,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_BranchId = 20900,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Retain = 20901,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState = 20902,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState_Id = 20903,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState_Name = 20904,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState_Number = 20905,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 20906,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState_TransitionTime = 20907,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 20908,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState_TrueState = 20909,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_EnabledState_FalseState = 20910,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Quality = 20911,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Quality_SourceTimestamp = 20912,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LastSeverity = 20913,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LastSeverity_SourceTimestamp = 20914,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Comment = 20915,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Comment_SourceTimestamp = 20916,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ClientUserId = 20917,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Disable = 20918,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Enable = 20919,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AddComment = 20920,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AddComment_InputArguments = 20921,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState = 20922,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState_Id = 20923,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState_Name = 20924,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState_Number = 20925,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState_EffectiveDisplayName = 20926,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState_TransitionTime = 20927,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 20928,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState_TrueState = 20929,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AckedState_FalseState = 20930,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState = 20931,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Id = 20932,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Name = 20933,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Number = 20934,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 20935,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_TransitionTime = 20936,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 20937,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_TrueState = 20938,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_FalseState = 20939,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Acknowledge = 20940,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Acknowledge_InputArguments = 20941,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Confirm = 20942,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Confirm_InputArguments = 20943,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState = 20944,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState_Id = 20945,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState_Name = 20946,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState_Number = 20947,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 20948,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState_TransitionTime = 20949,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 20950,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState_TrueState = 20951,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ActiveState_FalseState = 20952,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_InputNode = 20953,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState = 20954,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Id = 20955,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Name = 20956,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Number = 20957,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 20958,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState_TransitionTime = 20959,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 20960,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState_TrueState = 20961,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedState_FalseState = 20962,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState = 20963,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Id = 20964,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Name = 20965,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Number = 20966,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 20967,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_TransitionTime = 20968,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 20969,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_TrueState = 20970,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_FalseState = 20971,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState = 20972,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState = 20973,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Id = 20974,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Name = 20975,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Number = 20976,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 20977,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition = 20978,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Id = 20979,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Name = 20980,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Number = 20981,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 20982,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 20983,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_AvailableStates = 20984,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_AvailableTransitions = 20985,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_UnshelveTime = 20986,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve = 20987,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 20988,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve = 20989,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve = 20990,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SuppressedOrShelved = 20991,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_MaxTimeShelved = 20992,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AudibleEnabled = 20993,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AudibleSound = 20994,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AudibleSound_ListId = 20995,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AudibleSound_AgencyId = 20996,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_AudibleSound_VersionId = 20997,
    VersionTime = 20998,
    SessionlessInvokeResponseType = 20999,
    SessionlessInvokeResponseType_Encoding_DefaultBinary = 21001,
    OpcUa_BinarySchema_FieldTargetDataType = 21002,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_SecurityTokenID_DiagnosticsLevel = 21003,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_TimeToNextTokenID = 21004,
    ReaderGroupType_DataSetReaderName_Placeholder_Diagnostics_LiveValues_TimeToNextTokenID_DiagnosticsLevel = 21005,
    ReaderGroupType_DataSetReaderName_Placeholder_SubscribedDataSet = 21006,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState = 21007,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState_Id = 21008,
    ReaderGroupType_DataSetReaderName_Placeholder_CreateTargetVariables = 21009,
    ReaderGroupType_DataSetReaderName_Placeholder_CreateTargetVariables_InputArguments = 21010,
    ReaderGroupType_DataSetReaderName_Placeholder_CreateTargetVariables_OutputArguments = 21011,
    ReaderGroupType_DataSetReaderName_Placeholder_CreateDataSetMirror = 21012,
    ReaderGroupType_DataSetReaderName_Placeholder_CreateDataSetMirror_InputArguments = 21013,
    ReaderGroupType_DataSetReaderName_Placeholder_CreateDataSetMirror_OutputArguments = 21014,
    ReaderGroupType_Diagnostics = 21015,
    ReaderGroupType_Diagnostics_DiagnosticsLevel = 21016,
    ReaderGroupType_Diagnostics_TotalInformation = 21017,
    ReaderGroupType_Diagnostics_TotalInformation_Active = 21018,
    ReaderGroupType_Diagnostics_TotalInformation_Classification = 21019,
    ReaderGroupType_Diagnostics_TotalInformation_DiagnosticsLevel = 21020,
    ReaderGroupType_Diagnostics_TotalInformation_TimeFirstChange = 21021,
    ReaderGroupType_Diagnostics_TotalError = 21022,
    ReaderGroupType_Diagnostics_TotalError_Active = 21023,
    ReaderGroupType_Diagnostics_TotalError_Classification = 21024,
    ReaderGroupType_Diagnostics_TotalError_DiagnosticsLevel = 21025,
    ReaderGroupType_Diagnostics_TotalError_TimeFirstChange = 21026,
    ReaderGroupType_Diagnostics_Reset = 21027,
    ReaderGroupType_Diagnostics_SubError = 21028,
    ReaderGroupType_Diagnostics_Counters = 21029,
    ReaderGroupType_Diagnostics_Counters_StateError = 21030,
    ReaderGroupType_Diagnostics_Counters_StateError_Active = 21031,
    ReaderGroupType_Diagnostics_Counters_StateError_Classification = 21032,
    ReaderGroupType_Diagnostics_Counters_StateError_DiagnosticsLevel = 21033,
    ReaderGroupType_Diagnostics_Counters_StateError_TimeFirstChange = 21034,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByMethod = 21035,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByMethod_Active = 21036,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByMethod_Classification = 21037,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByMethod_DiagnosticsLevel = 21038,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByMethod_TimeFirstChange = 21039,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByParent = 21040,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByParent_Active = 21041,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByParent_Classification = 21042,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByParent_DiagnosticsLevel = 21043,
    ReaderGroupType_Diagnostics_Counters_StateOperationalByParent_TimeFirstChange = 21044,
    ReaderGroupType_Diagnostics_Counters_StateOperationalFromError = 21045,
    ReaderGroupType_Diagnostics_Counters_StateOperationalFromError_Active = 21046,
    ReaderGroupType_Diagnostics_Counters_StateOperationalFromError_Classification = 21047,
    ReaderGroupType_Diagnostics_Counters_StateOperationalFromError_DiagnosticsLevel = 21048,
    ReaderGroupType_Diagnostics_Counters_StateOperationalFromError_TimeFirstChange = 21049,
    ReaderGroupType_Diagnostics_Counters_StatePausedByParent = 21050,
    ReaderGroupType_Diagnostics_Counters_StatePausedByParent_Active = 21051,
    ReaderGroupType_Diagnostics_Counters_StatePausedByParent_Classification = 21052,
    ReaderGroupType_Diagnostics_Counters_StatePausedByParent_DiagnosticsLevel = 21053,
    ReaderGroupType_Diagnostics_Counters_StatePausedByParent_TimeFirstChange = 21054,
    ReaderGroupType_Diagnostics_Counters_StateDisabledByMethod = 21055,
    ReaderGroupType_Diagnostics_Counters_StateDisabledByMethod_Active = 21056,
    ReaderGroupType_Diagnostics_Counters_StateDisabledByMethod_Classification = 21057,
    ReaderGroupType_Diagnostics_Counters_StateDisabledByMethod_DiagnosticsLevel = 21058,
    ReaderGroupType_Diagnostics_Counters_StateDisabledByMethod_TimeFirstChange = 21059,
    ReaderGroupType_Diagnostics_LiveValues = 21060,
    ReaderGroupType_Diagnostics_Counters_ReceivedNetworkMessages = 21061,
    ReaderGroupType_Diagnostics_Counters_ReceivedNetworkMessages_Active = 21062,
    ReaderGroupType_Diagnostics_Counters_ReceivedNetworkMessages_Classification = 21063,
    ReaderGroupType_Diagnostics_Counters_ReceivedNetworkMessages_DiagnosticsLevel = 21064,
    ReaderGroupType_Diagnostics_Counters_ReceivedNetworkMessages_TimeFirstChange = 21065,
    ReaderGroupType_Diagnostics_Counters_ReceivedInvalidNetworkMessages = 21066,
    ReaderGroupType_Diagnostics_Counters_ReceivedInvalidNetworkMessages_Active = 21067,
    ReaderGroupType_Diagnostics_Counters_ReceivedInvalidNetworkMessages_Classification = 21068,
    ReaderGroupType_Diagnostics_Counters_ReceivedInvalidNetworkMessages_DiagnosticsLevel = 21069,
    ReaderGroupType_Diagnostics_Counters_ReceivedInvalidNetworkMessages_TimeFirstChange = 21070,
    ReaderGroupType_Diagnostics_Counters_DecryptionErrors = 21071,
    ReaderGroupType_Diagnostics_Counters_DecryptionErrors_Active = 21072,
    ReaderGroupType_Diagnostics_Counters_DecryptionErrors_Classification = 21073,
    ReaderGroupType_Diagnostics_Counters_DecryptionErrors_DiagnosticsLevel = 21074,
    ReaderGroupType_Diagnostics_Counters_DecryptionErrors_TimeFirstChange = 21075,
    ReaderGroupType_Diagnostics_LiveValues_ConfiguredDataSetReaders = 21076,
    ReaderGroupType_Diagnostics_LiveValues_ConfiguredDataSetReaders_DiagnosticsLevel = 21077,
    ReaderGroupType_Diagnostics_LiveValues_OperationalDataSetReaders = 21078,
    ReaderGroupType_Diagnostics_LiveValues_OperationalDataSetReaders_DiagnosticsLevel = 21079,
    ReaderGroupType_TransportSettings = 21080,
    ReaderGroupType_MessageSettings = 21081,
    ReaderGroupType_AddDataSetReader = 21082,
    ReaderGroupType_AddDataSetReader_InputArguments = 21083,
    ReaderGroupType_AddDataSetReader_OutputArguments = 21084,
    ReaderGroupType_RemoveDataSetReader = 21085,
    ReaderGroupType_RemoveDataSetReader_InputArguments = 21086,
    PubSubGroupTypeAddReaderMethodType = 21087,
    PubSubGroupTypeAddReaderMethodType_InputArguments = 21088,
    PubSubGroupTypeAddReaderMethodType_OutputArguments = 21089,
    ReaderGroupTransportType = 21090,
    ReaderGroupMessageType = 21091,
    DataSetWriterType_DataSetWriterId = 21092,
    DataSetWriterType_DataSetFieldContentMask = 21093,
    DataSetWriterType_KeyFrameCount = 21094,
    DataSetWriterType_MessageSettings = 21095,
    DataSetWriterMessageType = 21096,
    DataSetReaderType_PublisherId = 21097,
    DataSetReaderType_WriterGroupId = 21098,
    DataSetReaderType_DataSetWriterId = 21099,
    DataSetReaderType_DataSetMetaData = 21100,
    DataSetReaderType_DataSetFieldContentMask = 21101,
    DataSetReaderType_MessageReceiveTimeout = 21102,
    DataSetReaderType_MessageSettings = 21103,
    DataSetReaderMessageType = 21104,
    UadpWriterGroupMessageType = 21105,
    UadpWriterGroupMessageType_GroupVersion = 21106,
    UadpWriterGroupMessageType_DataSetOrdering = 21107,
    UadpWriterGroupMessageType_NetworkMessageContentMask = 21108,
    UadpWriterGroupMessageType_SamplingOffset = 21109,
    UadpWriterGroupMessageType_PublishingOffset = 21110,
    UadpDataSetWriterMessageType = 21111,
    UadpDataSetWriterMessageType_DataSetMessageContentMask = 21112,
    UadpDataSetWriterMessageType_ConfiguredSize = 21113,
    UadpDataSetWriterMessageType_NetworkMessageNumber = 21114,
    UadpDataSetWriterMessageType_DataSetOffset = 21115,
    UadpDataSetReaderMessageType = 21116,
    UadpDataSetReaderMessageType_GroupVersion = 21117,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState_Name = 21118,
    UadpDataSetReaderMessageType_NetworkMessageNumber = 21119,
    UadpDataSetReaderMessageType_DataSetClassId = 21120,
    UadpDataSetReaderMessageType_NetworkMessageContentMask = 21121,
    UadpDataSetReaderMessageType_DataSetMessageContentMask = 21122,
    UadpDataSetReaderMessageType_PublishingInterval = 21123,
    UadpDataSetReaderMessageType_ProcessingOffset = 21124,
    UadpDataSetReaderMessageType_ReceiveOffset = 21125,
    JsonWriterGroupMessageType = 21126,
    JsonWriterGroupMessageType_NetworkMessageContentMask = 21127,
    JsonDataSetWriterMessageType = 21128,
    JsonDataSetWriterMessageType_DataSetMessageContentMask = 21129,
    JsonDataSetReaderMessageType = 21130,
    JsonDataSetReaderMessageType_NetworkMessageContentMask = 21131,
    JsonDataSetReaderMessageType_DataSetMessageContentMask = 21132,
    DatagramWriterGroupTransportType = 21133,
    DatagramWriterGroupTransportType_MessageRepeatCount = 21134,
    DatagramWriterGroupTransportType_MessageRepeatDelay = 21135,
    BrokerWriterGroupTransportType = 21136,
    BrokerWriterGroupTransportType_QueueName = 21137,
    BrokerDataSetWriterTransportType = 21138,
    BrokerDataSetWriterTransportType_QueueName = 21139,
    BrokerDataSetWriterTransportType_MetaDataQueueName = 21140,
    BrokerDataSetWriterTransportType_MetaDataUpdateTime = 21141,
    BrokerDataSetReaderTransportType = 21142,
    BrokerDataSetReaderTransportType_QueueName = 21143,
    BrokerDataSetReaderTransportType_MetaDataQueueName = 21144,
    NetworkAddressType = 21145,
    NetworkAddressType_NetworkInterface = 21146,
    NetworkAddressUrlType = 21147,
    NetworkAddressUrlType_NetworkInterface = 21148,
    NetworkAddressUrlType_Url = 21149,
    WriterGroupDataType_Encoding_DefaultBinary = 21150,
    NetworkAddressDataType_Encoding_DefaultBinary = 21151,
    NetworkAddressUrlDataType_Encoding_DefaultBinary = 21152,
    ReaderGroupDataType_Encoding_DefaultBinary = 21153,
    PubSubConfigurationDataType_Encoding_DefaultBinary = 21154,
    DatagramWriterGroupTransportDataType_Encoding_DefaultBinary = 21155,
    OpcUa_BinarySchema_WriterGroupDataType = 21156,
    OpcUa_BinarySchema_WriterGroupDataType_DataTypeVersion = 21157,
    OpcUa_BinarySchema_WriterGroupDataType_DictionaryFragment = 21158,
    OpcUa_BinarySchema_NetworkAddressDataType = 21159,
    OpcUa_BinarySchema_NetworkAddressDataType_DataTypeVersion = 21160,
    OpcUa_BinarySchema_NetworkAddressDataType_DictionaryFragment = 21161,
    OpcUa_BinarySchema_NetworkAddressUrlDataType = 21162,
    OpcUa_BinarySchema_NetworkAddressUrlDataType_DataTypeVersion = 21163,
    OpcUa_BinarySchema_NetworkAddressUrlDataType_DictionaryFragment = 21164,
    OpcUa_BinarySchema_ReaderGroupDataType = 21165,
    OpcUa_BinarySchema_ReaderGroupDataType_DataTypeVersion = 21166,
    OpcUa_BinarySchema_ReaderGroupDataType_DictionaryFragment = 21167,
    OpcUa_BinarySchema_PubSubConfigurationDataType = 21168,
    OpcUa_BinarySchema_PubSubConfigurationDataType_DataTypeVersion = 21169,
    OpcUa_BinarySchema_PubSubConfigurationDataType_DictionaryFragment = 21170,
    OpcUa_BinarySchema_DatagramWriterGroupTransportDataType = 21171,
    OpcUa_BinarySchema_DatagramWriterGroupTransportDataType_DataTypeVersion = 21172,
    OpcUa_BinarySchema_DatagramWriterGroupTransportDataType_DictionaryFragment = 21173,
    WriterGroupDataType_Encoding_DefaultJson = 21198,
    NetworkAddressDataType_Encoding_DefaultJson = 21199,
    NetworkAddressUrlDataType_Encoding_DefaultJson = 21200,
    ReaderGroupDataType_Encoding_DefaultJson = 21201,
    PubSubConfigurationDataType_Encoding_DefaultJson = 21202,
    DatagramWriterGroupTransportDataType_Encoding_DefaultJson = 21203,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState_Number = 21204,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 21205,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState_TransitionTime = 21206,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 21207,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState_TrueState = 21208,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_SilenceState_FalseState = 21209,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OnDelay = 21210,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_OffDelay = 21211,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_FirstInGroupFlag = 21212,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_FirstInGroup = 21213,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState = 21214,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState_Id = 21215,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState_Name = 21216,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState_Number = 21217,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 21218,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState_TransitionTime = 21219,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 21220,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState_TrueState = 21221,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_LatchedState_FalseState = 21222,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ReAlarmTime = 21223,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ReAlarmRepeatCount = 21224,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Silence = 21225,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Suppress = 21226,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Unsuppress = 21227,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_RemoveFromService = 21228,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_PlaceInService = 21229,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Reset = 21230,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_NormalState = 21231,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ExpirationDate = 21232,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ExpirationLimit = 21233,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_CertificateType = 21234,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Certificate = 21235,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate = 21236,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EventId = 21237,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EventType = 21238,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SourceNode = 21239,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SourceName = 21240,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Time = 21241,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ReceiveTime = 21242,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LocalTime = 21243,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Message = 21244,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Severity = 21245,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConditionClassId = 21246,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConditionClassName = 21247,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConditionSubClassId = 21248,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConditionSubClassName = 21249,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConditionName = 21250,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_BranchId = 21251,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Retain = 21252,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState = 21253,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Id = 21254,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Name = 21255,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Number = 21256,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 21257,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_TransitionTime = 21258,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 21259,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_TrueState = 21260,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_FalseState = 21261,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Quality = 21262,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Quality_SourceTimestamp = 21263,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LastSeverity = 21264,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 21265,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Comment = 21266,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Comment_SourceTimestamp = 21267,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ClientUserId = 21268,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Disable = 21269,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Enable = 21270,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AddComment = 21271,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AddComment_InputArguments = 21272,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState = 21273,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Id = 21274,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Name = 21275,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Number = 21276,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 21277,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_TransitionTime = 21278,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 21279,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_TrueState = 21280,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_FalseState = 21281,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState = 21282,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Id = 21283,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Name = 21284,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Number = 21285,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 21286,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 21287,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 21288,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_TrueState = 21289,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_FalseState = 21290,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Acknowledge = 21291,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Acknowledge_InputArguments = 21292,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Confirm = 21293,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Confirm_InputArguments = 21294,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState = 21295,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Id = 21296,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Name = 21297,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Number = 21298,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 21299,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_TransitionTime = 21300,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 21301,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_TrueState = 21302,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_FalseState = 21303,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_InputNode = 21304,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState = 21305,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Id = 21306,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Name = 21307,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Number = 21308,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 21309,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 21310,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 21311,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_TrueState = 21312,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_FalseState = 21313,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState = 21314,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Id = 21315,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Name = 21316,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Number = 21317,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 21318,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 21319,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 21320,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 21321,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 21322,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState = 21323,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState = 21324,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 21325,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 21326,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 21327,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 21328,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition = 21329,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 21330,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 21331,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 21332,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 21333,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 21334,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 21335,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 21336,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 21337,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 21338,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 21339,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve = 21340,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 21341,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedOrShelved = 21342,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_MaxTimeShelved = 21343,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AudibleEnabled = 21344,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound = 21345,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_ListId = 21346,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_AgencyId = 21347,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_VersionId = 21348,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState = 21349,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Id = 21350,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Name = 21351,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Number = 21352,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 21353,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_TransitionTime = 21354,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 21355,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_TrueState = 21356,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_FalseState = 21357,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OnDelay = 21358,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_OffDelay = 21359,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_FirstInGroupFlag = 21360,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_FirstInGroup = 21361,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState = 21362,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Id = 21363,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Name = 21364,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Number = 21365,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 21366,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_TransitionTime = 21367,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 21368,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_TrueState = 21369,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_FalseState = 21370,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ReAlarmTime = 21371,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ReAlarmRepeatCount = 21372,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Silence = 21373,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Suppress = 21374,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress = 21375,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService = 21376,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService = 21377,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Reset = 21378,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_NormalState = 21379,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_TrustListId = 21380,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_LastUpdateTime = 21381,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_UpdateFrequency = 21382,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_UpdateFrequency = 21383,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired = 21384,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EventId = 21385,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EventType = 21386,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SourceNode = 21387,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SourceName = 21388,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Time = 21389,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ReceiveTime = 21390,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LocalTime = 21391,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Message = 21392,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Severity = 21393,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConditionClassId = 21394,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConditionClassName = 21395,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConditionSubClassId = 21396,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConditionSubClassName = 21397,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConditionName = 21398,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_BranchId = 21399,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Retain = 21400,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState = 21401,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState_Id = 21402,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState_Name = 21403,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState_Number = 21404,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState_EffectiveDisplayName = 21405,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState_TransitionTime = 21406,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState_EffectiveTransitionTime = 21407,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState_TrueState = 21408,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_EnabledState_FalseState = 21409,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Quality = 21410,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Quality_SourceTimestamp = 21411,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LastSeverity = 21412,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LastSeverity_SourceTimestamp = 21413,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Comment = 21414,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Comment_SourceTimestamp = 21415,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ClientUserId = 21416,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Disable = 21417,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Enable = 21418,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AddComment = 21419,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AddComment_InputArguments = 21420,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState = 21421,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState_Id = 21422,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState_Name = 21423,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState_Number = 21424,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState_EffectiveDisplayName = 21425,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState_TransitionTime = 21426,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState_EffectiveTransitionTime = 21427,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState_TrueState = 21428,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AckedState_FalseState = 21429,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState = 21430,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState_Id = 21431,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState_Name = 21432,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState_Number = 21433,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState_EffectiveDisplayName = 21434,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState_TransitionTime = 21435,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 21436,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState_TrueState = 21437,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ConfirmedState_FalseState = 21438,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Acknowledge = 21439,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Acknowledge_InputArguments = 21440,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Confirm = 21441,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Confirm_InputArguments = 21442,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState = 21443,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState_Id = 21444,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState_Name = 21445,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState_Number = 21446,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState_EffectiveDisplayName = 21447,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState_TransitionTime = 21448,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState_EffectiveTransitionTime = 21449,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState_TrueState = 21450,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ActiveState_FalseState = 21451,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_InputNode = 21452,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState = 21453,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState_Id = 21454,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState_Name = 21455,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState_Number = 21456,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState_EffectiveDisplayName = 21457,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState_TransitionTime = 21458,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState_EffectiveTransitionTime = 21459,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState_TrueState = 21460,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedState_FalseState = 21461,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState = 21462,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState_Id = 21463,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState_Name = 21464,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState_Number = 21465,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 21466,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState_TransitionTime = 21467,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 21468,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState_TrueState = 21469,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OutOfServiceState_FalseState = 21470,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState = 21471,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_CurrentState = 21472,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_CurrentState_Id = 21473,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_CurrentState_Name = 21474,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_CurrentState_Number = 21475,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 21476,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_LastTransition = 21477,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_LastTransition_Id = 21478,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_LastTransition_Name = 21479,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_LastTransition_Number = 21480,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 21481,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 21482,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_AvailableStates = 21483,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_AvailableTransitions = 21484,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_UnshelveTime = 21485,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_TimedShelve = 21486,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 21487,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_Unshelve = 21488,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_OneShotShelve = 21489,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SuppressedOrShelved = 21490,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_MaxTimeShelved = 21491,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AudibleEnabled = 21492,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AudibleSound = 21493,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AudibleSound_ListId = 21494,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AudibleSound_AgencyId = 21495,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_AudibleSound_VersionId = 21496,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState = 21497,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState_Id = 21498,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState_Name = 21499,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState_Number = 21500,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState_EffectiveDisplayName = 21501,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState_TransitionTime = 21502,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState_EffectiveTransitionTime = 21503,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState_TrueState = 21504,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_SilenceState_FalseState = 21505,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OnDelay = 21506,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_OffDelay = 21507,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_FirstInGroupFlag = 21508,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_FirstInGroup = 21509,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState = 21510,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState_Id = 21511,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState_Name = 21512,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState_Number = 21513,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState_EffectiveDisplayName = 21514,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState_TransitionTime = 21515,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState_EffectiveTransitionTime = 21516,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState_TrueState = 21517,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_LatchedState_FalseState = 21518,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ReAlarmTime = 21519,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ReAlarmRepeatCount = 21520,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Silence = 21521,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Suppress = 21522,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Unsuppress = 21523,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_RemoveFromService = 21524,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_PlaceInService = 21525,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Reset = 21526,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_NormalState = 21527,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ExpirationDate = 21528,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ExpirationLimit = 21529,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_CertificateType = 21530,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Certificate = 21531,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate = 21532,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EventId = 21533,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EventType = 21534,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SourceNode = 21535,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SourceName = 21536,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Time = 21537,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ReceiveTime = 21538,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LocalTime = 21539,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Message = 21540,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Severity = 21541,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConditionClassId = 21542,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConditionClassName = 21543,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConditionSubClassId = 21544,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConditionSubClassName = 21545,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConditionName = 21546,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_BranchId = 21547,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Retain = 21548,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState = 21549,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState_Id = 21550,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState_Name = 21551,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState_Number = 21552,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 21553,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState_TransitionTime = 21554,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 21555,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState_TrueState = 21556,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_EnabledState_FalseState = 21557,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Quality = 21558,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Quality_SourceTimestamp = 21559,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LastSeverity = 21560,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LastSeverity_SourceTimestamp = 21561,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Comment = 21562,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Comment_SourceTimestamp = 21563,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ClientUserId = 21564,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Disable = 21565,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Enable = 21566,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AddComment = 21567,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AddComment_InputArguments = 21568,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState = 21569,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState_Id = 21570,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState_Name = 21571,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState_Number = 21572,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState_EffectiveDisplayName = 21573,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState_TransitionTime = 21574,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 21575,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState_TrueState = 21576,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AckedState_FalseState = 21577,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState = 21578,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState_Id = 21579,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState_Name = 21580,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState_Number = 21581,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 21582,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState_TransitionTime = 21583,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 21584,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState_TrueState = 21585,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ConfirmedState_FalseState = 21586,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Acknowledge = 21587,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Acknowledge_InputArguments = 21588,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Confirm = 21589,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Confirm_InputArguments = 21590,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState = 21591,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState_Id = 21592,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState_Name = 21593,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState_Number = 21594,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 21595,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState_TransitionTime = 21596,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 21597,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState_TrueState = 21598,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ActiveState_FalseState = 21599,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_InputNode = 21600,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState = 21601,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState_Id = 21602,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState_Name = 21603,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState_Number = 21604,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 21605,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState_TransitionTime = 21606,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 21607,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState_TrueState = 21608,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedState_FalseState = 21609,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState = 21610,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState_Id = 21611,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState_Name = 21612,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState_Number = 21613,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 21614,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState_TransitionTime = 21615,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 21616,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState_TrueState = 21617,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OutOfServiceState_FalseState = 21618,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState = 21619,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_CurrentState = 21620,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_CurrentState_Id = 21621,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_CurrentState_Name = 21622,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_CurrentState_Number = 21623,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 21624,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_LastTransition = 21625,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_LastTransition_Id = 21626,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_LastTransition_Name = 21627,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_LastTransition_Number = 21628,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 21629,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 21630,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_AvailableStates = 21631,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_AvailableTransitions = 21632,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_UnshelveTime = 21633,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_TimedShelve = 21634,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 21635,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_Unshelve = 21636,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_OneShotShelve = 21637,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SuppressedOrShelved = 21638,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_MaxTimeShelved = 21639,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AudibleEnabled = 21640,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AudibleSound = 21641,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AudibleSound_ListId = 21642,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AudibleSound_AgencyId = 21643,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_AudibleSound_VersionId = 21644,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState = 21645,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState_Id = 21646,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState_Name = 21647,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState_Number = 21648,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 21649,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState_TransitionTime = 21650,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 21651,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState_TrueState = 21652,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_SilenceState_FalseState = 21653,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OnDelay = 21654,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_OffDelay = 21655,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_FirstInGroupFlag = 21656,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_FirstInGroup = 21657,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState = 21658,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState_Id = 21659,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState_Name = 21660,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState_Number = 21661,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 21662,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState_TransitionTime = 21663,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 21664,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState_TrueState = 21665,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LatchedState_FalseState = 21666,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ReAlarmTime = 21667,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ReAlarmRepeatCount = 21668,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Silence = 21669,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Suppress = 21670,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Unsuppress = 21671,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_RemoveFromService = 21672,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_PlaceInService = 21673,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Reset = 21674,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_NormalState = 21675,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_TrustListId = 21676,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_LastUpdateTime = 21677,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_UpdateFrequency = 21678,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_UpdateFrequency = 21679,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired = 21680,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EventId = 21681,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EventType = 21682,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SourceNode = 21683,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SourceName = 21684,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Time = 21685,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ReceiveTime = 21686,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LocalTime = 21687,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Message = 21688,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Severity = 21689,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionClassId = 21690,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionClassName = 21691,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionSubClassId = 21692,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionSubClassName = 21693,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionName = 21694,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_BranchId = 21695,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Retain = 21696,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState = 21697,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_Id = 21698,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_Name = 21699,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_Number = 21700,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 21701,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_TransitionTime = 21702,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 21703,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_TrueState = 21704,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_FalseState = 21705,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Quality = 21706,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Quality_SourceTimestamp = 21707,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LastSeverity = 21708,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LastSeverity_SourceTimestamp = 21709,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Comment = 21710,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Comment_SourceTimestamp = 21711,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ClientUserId = 21712,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Disable = 21713,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Enable = 21714,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AddComment = 21715,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AddComment_InputArguments = 21716,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState = 21717,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_Id = 21718,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_Name = 21719,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_Number = 21720,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_EffectiveDisplayName = 21721,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_TransitionTime = 21722,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 21723,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_TrueState = 21724,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_FalseState = 21725,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState = 21726,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Id = 21727,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Name = 21728,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Number = 21729,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 21730,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_TransitionTime = 21731,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 21732,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_TrueState = 21733,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_FalseState = 21734,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Acknowledge = 21735,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Acknowledge_InputArguments = 21736,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Confirm = 21737,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Confirm_InputArguments = 21738,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState = 21739,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_Id = 21740,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_Name = 21741,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_Number = 21742,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 21743,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_TransitionTime = 21744,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 21745,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_TrueState = 21746,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_FalseState = 21747,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_InputNode = 21748,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState = 21749,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_Id = 21750,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_Name = 21751,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_Number = 21752,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 21753,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_TransitionTime = 21754,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 21755,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_TrueState = 21756,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_FalseState = 21757,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState = 21758,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Id = 21759,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Name = 21760,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Number = 21761,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 21762,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_TransitionTime = 21763,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 21764,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_TrueState = 21765,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_FalseState = 21766,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState = 21767,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState = 21768,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Id = 21769,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Name = 21770,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Number = 21771,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 21772,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition = 21773,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Id = 21774,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Name = 21775,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Number = 21776,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 21777,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 21778,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_AvailableStates = 21779,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_AvailableTransitions = 21780,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_UnshelveTime = 21781,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve = 21782,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 21783,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve = 21784,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve = 21785,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedOrShelved = 21786,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_MaxTimeShelved = 21787,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleEnabled = 21788,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleSound = 21789,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleSound_ListId = 21790,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleSound_AgencyId = 21791,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleSound_VersionId = 21792,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState = 21793,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_Id = 21794,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_Name = 21795,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_Number = 21796,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 21797,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_TransitionTime = 21798,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 21799,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_TrueState = 21800,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_FalseState = 21801,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OnDelay = 21802,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OffDelay = 21803,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_FirstInGroupFlag = 21804,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_FirstInGroup = 21805,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState = 21806,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_Id = 21807,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_Name = 21808,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_Number = 21809,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 21810,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_TransitionTime = 21811,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 21812,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_TrueState = 21813,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_FalseState = 21814,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ReAlarmTime = 21815,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ReAlarmRepeatCount = 21816,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Silence = 21817,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Suppress = 21818,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Unsuppress = 21819,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_RemoveFromService = 21820,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_PlaceInService = 21821,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Reset = 21822,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_NormalState = 21823,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ExpirationDate = 21824,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ExpirationLimit = 21825,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_CertificateType = 21826,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Certificate = 21827,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate = 21828,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EventId = 21829,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EventType = 21830,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SourceNode = 21831,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SourceName = 21832,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Time = 21833,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ReceiveTime = 21834,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LocalTime = 21835,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Message = 21836,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Severity = 21837,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionClassId = 21838,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionClassName = 21839,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionSubClassId = 21840,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionSubClassName = 21841,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionName = 21842,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_BranchId = 21843,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Retain = 21844,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState = 21845,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Id = 21846,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Name = 21847,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Number = 21848,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 21849,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_TransitionTime = 21850,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 21851,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_TrueState = 21852,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_FalseState = 21853,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Quality = 21854,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Quality_SourceTimestamp = 21855,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LastSeverity = 21856,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 21857,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Comment = 21858,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Comment_SourceTimestamp = 21859,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ClientUserId = 21860,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Disable = 21861,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Enable = 21862,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AddComment = 21863,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AddComment_InputArguments = 21864,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState = 21865,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Id = 21866,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Name = 21867,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Number = 21868,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 21869,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_TransitionTime = 21870,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 21871,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_TrueState = 21872,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_FalseState = 21873,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState = 21874,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Id = 21875,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Name = 21876,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Number = 21877,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 21878,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 21879,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 21880,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_TrueState = 21881,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_FalseState = 21882,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Acknowledge = 21883,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Acknowledge_InputArguments = 21884,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Confirm = 21885,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Confirm_InputArguments = 21886,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState = 21887,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Id = 21888,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Name = 21889,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Number = 21890,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 21891,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_TransitionTime = 21892,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 21893,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_TrueState = 21894,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_FalseState = 21895,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_InputNode = 21896,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState = 21897,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Id = 21898,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Name = 21899,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Number = 21900,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 21901,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 21902,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 21903,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_TrueState = 21904,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_FalseState = 21905,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState = 21906,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Id = 21907,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Name = 21908,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Number = 21909,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 21910,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 21911,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 21912,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 21913,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 21914,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState = 21915,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState = 21916,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 21917,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 21918,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 21919,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 21920,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition = 21921,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 21922,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 21923,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 21924,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 21925,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 21926,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 21927,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 21928,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 21929,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 21930,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 21931,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve = 21932,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 21933,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedOrShelved = 21934,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_MaxTimeShelved = 21935,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleEnabled = 21936,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound = 21937,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_ListId = 21938,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_AgencyId = 21939,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_VersionId = 21940,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState = 21941,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Id = 21942,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Name = 21943,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Number = 21944,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 21945,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_TransitionTime = 21946,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 21947,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_TrueState = 21948,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_FalseState = 21949,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OnDelay = 21950,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OffDelay = 21951,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_FirstInGroupFlag = 21952,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_FirstInGroup = 21953,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState = 21954,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Id = 21955,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Name = 21956,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Number = 21957,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 21958,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_TransitionTime = 21959,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 21960,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_TrueState = 21961,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_FalseState = 21962,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ReAlarmTime = 21963,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ReAlarmRepeatCount = 21964,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Silence = 21965,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Suppress = 21966,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress = 21967,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService = 21968,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService = 21969,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Reset = 21970,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_NormalState = 21971,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_TrustListId = 21972,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LastUpdateTime = 21973,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_UpdateFrequency = 21974,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_UpdateFrequency = 21975,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired = 21976,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EventId = 21977,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EventType = 21978,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SourceNode = 21979,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SourceName = 21980,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Time = 21981,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ReceiveTime = 21982,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LocalTime = 21983,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Message = 21984,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Severity = 21985,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionClassId = 21986,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionClassName = 21987,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionSubClassId = 21988,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionSubClassName = 21989,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionName = 21990,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_BranchId = 21991,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Retain = 21992,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState = 21993,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_Id = 21994,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_Name = 21995,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_Number = 21996,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 21997,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_TransitionTime = 21998,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 21999,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_TrueState = 22000,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_FalseState = 22001,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Quality = 22002,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Quality_SourceTimestamp = 22003,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LastSeverity = 22004,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LastSeverity_SourceTimestamp = 22005,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Comment = 22006,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Comment_SourceTimestamp = 22007,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ClientUserId = 22008,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Disable = 22009,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Enable = 22010,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AddComment = 22011,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AddComment_InputArguments = 22012,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState = 22013,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_Id = 22014,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_Name = 22015,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_Number = 22016,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_EffectiveDisplayName = 22017,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_TransitionTime = 22018,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 22019,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_TrueState = 22020,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_FalseState = 22021,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState = 22022,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Id = 22023,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Name = 22024,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Number = 22025,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 22026,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_TransitionTime = 22027,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 22028,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_TrueState = 22029,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_FalseState = 22030,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Acknowledge = 22031,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Acknowledge_InputArguments = 22032,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Confirm = 22033,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Confirm_InputArguments = 22034,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState = 22035,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_Id = 22036,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_Name = 22037,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_Number = 22038,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 22039,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_TransitionTime = 22040,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 22041,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_TrueState = 22042,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_FalseState = 22043,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_InputNode = 22044,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState = 22045,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_Id = 22046,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_Name = 22047,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_Number = 22048,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 22049,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_TransitionTime = 22050,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 22051,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_TrueState = 22052,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_FalseState = 22053,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState = 22054,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Id = 22055,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Name = 22056,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Number = 22057,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 22058,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_TransitionTime = 22059,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 22060,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_TrueState = 22061,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_FalseState = 22062,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState = 22063,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState = 22064,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Id = 22065,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Name = 22066,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Number = 22067,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 22068,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition = 22069,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Id = 22070,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Name = 22071,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Number = 22072,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 22073,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 22074,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_AvailableStates = 22075,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_AvailableTransitions = 22076,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_UnshelveTime = 22077,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve = 22078,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 22079,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve = 22080,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve = 22081,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedOrShelved = 22082,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_MaxTimeShelved = 22083,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleEnabled = 22084,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleSound = 22085,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleSound_ListId = 22086,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleSound_AgencyId = 22087,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleSound_VersionId = 22088,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState = 22089,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_Id = 22090,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_Name = 22091,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_Number = 22092,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 22093,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_TransitionTime = 22094,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 22095,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_TrueState = 22096,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_FalseState = 22097,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OnDelay = 22098,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OffDelay = 22099,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_FirstInGroupFlag = 22100,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_FirstInGroup = 22101,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState = 22102,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_Id = 22103,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_Name = 22104,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_Number = 22105,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 22106,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_TransitionTime = 22107,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 22108,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_TrueState = 22109,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_FalseState = 22110,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ReAlarmTime = 22111,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ReAlarmRepeatCount = 22112,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Silence = 22113,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Suppress = 22114,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Unsuppress = 22115,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_RemoveFromService = 22116,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_PlaceInService = 22117,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Reset = 22118,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_NormalState = 22119,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ExpirationDate = 22120,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ExpirationLimit = 22121,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_CertificateType = 22122,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Certificate = 22123,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate = 22124,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EventId = 22125,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EventType = 22126,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SourceNode = 22127,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SourceName = 22128,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Time = 22129,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ReceiveTime = 22130,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LocalTime = 22131,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Message = 22132,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Severity = 22133,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionClassId = 22134,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionClassName = 22135,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionSubClassId = 22136,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionSubClassName = 22137,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionName = 22138,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_BranchId = 22139,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Retain = 22140,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState = 22141,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Id = 22142,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Name = 22143,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Number = 22144,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 22145,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_TransitionTime = 22146,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 22147,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_TrueState = 22148,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_FalseState = 22149,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Quality = 22150,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Quality_SourceTimestamp = 22151,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LastSeverity = 22152,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 22153,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Comment = 22154,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Comment_SourceTimestamp = 22155,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ClientUserId = 22156,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Disable = 22157,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Enable = 22158,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AddComment = 22159,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AddComment_InputArguments = 22160,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState = 22161,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Id = 22162,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Name = 22163,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Number = 22164,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 22165,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_TransitionTime = 22166,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 22167,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_TrueState = 22168,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_FalseState = 22169,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState = 22170,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Id = 22171,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Name = 22172,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Number = 22173,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 22174,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 22175,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 22176,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_TrueState = 22177,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_FalseState = 22178,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Acknowledge = 22179,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Acknowledge_InputArguments = 22180,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Confirm = 22181,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Confirm_InputArguments = 22182,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState = 22183,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Id = 22184,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Name = 22185,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Number = 22186,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 22187,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_TransitionTime = 22188,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 22189,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_TrueState = 22190,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_FalseState = 22191,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_InputNode = 22192,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState = 22193,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Id = 22194,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Name = 22195,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Number = 22196,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 22197,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 22198,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 22199,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_TrueState = 22200,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_FalseState = 22201,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState = 22202,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Id = 22203,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Name = 22204,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Number = 22205,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 22206,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 22207,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 22208,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 22209,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 22210,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState = 22211,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState = 22212,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 22213,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 22214,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 22215,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 22216,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition = 22217,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 22218,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 22219,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 22220,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 22221,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 22222,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 22223,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 22224,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 22225,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 22226,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 22227,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve = 22228,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 22229,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedOrShelved = 22230,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_MaxTimeShelved = 22231,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleEnabled = 22232,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound = 22233,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_ListId = 22234,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_AgencyId = 22235,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_VersionId = 22236,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState = 22237,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Id = 22238,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Name = 22239,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Number = 22240,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 22241,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_TransitionTime = 22242,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 22243,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_TrueState = 22244,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_FalseState = 22245,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OnDelay = 22246,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OffDelay = 22247,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_FirstInGroupFlag = 22248,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_FirstInGroup = 22249,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState = 22250,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Id = 22251,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Name = 22252,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Number = 22253,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 22254,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_TransitionTime = 22255,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 22256,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_TrueState = 22257,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_FalseState = 22258,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ReAlarmTime = 22259,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ReAlarmRepeatCount = 22260,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Silence = 22261,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Suppress = 22262,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress = 22263,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService = 22264,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService = 22265,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Reset = 22266,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_NormalState = 22267,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_TrustListId = 22268,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LastUpdateTime = 22269,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_UpdateFrequency = 22270,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_UpdateFrequency = 22271,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired = 22272,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EventId = 22273,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EventType = 22274,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SourceNode = 22275,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SourceName = 22276,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Time = 22277,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ReceiveTime = 22278,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LocalTime = 22279,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Message = 22280,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Severity = 22281,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionClassId = 22282,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionClassName = 22283,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionSubClassId = 22284,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionSubClassName = 22285,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionName = 22286,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_BranchId = 22287,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Retain = 22288,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState = 22289,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_Id = 22290,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_Name = 22291,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_Number = 22292,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 22293,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_TransitionTime = 22294,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 22295,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_TrueState = 22296,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_FalseState = 22297,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Quality = 22298,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Quality_SourceTimestamp = 22299,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LastSeverity = 22300,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LastSeverity_SourceTimestamp = 22301,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Comment = 22302,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Comment_SourceTimestamp = 22303,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ClientUserId = 22304,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Disable = 22305,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Enable = 22306,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AddComment = 22307,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AddComment_InputArguments = 22308,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState = 22309,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_Id = 22310,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_Name = 22311,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_Number = 22312,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_EffectiveDisplayName = 22313,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_TransitionTime = 22314,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 22315,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_TrueState = 22316,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_FalseState = 22317,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState = 22318,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Id = 22319,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Name = 22320,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Number = 22321,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 22322,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_TransitionTime = 22323,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 22324,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_TrueState = 22325,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_FalseState = 22326,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Acknowledge = 22327,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Acknowledge_InputArguments = 22328,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Confirm = 22329,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Confirm_InputArguments = 22330,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState = 22331,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_Id = 22332,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_Name = 22333,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_Number = 22334,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 22335,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_TransitionTime = 22336,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 22337,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_TrueState = 22338,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_FalseState = 22339,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_InputNode = 22340,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState = 22341,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Id = 22342,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Name = 22343,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Number = 22344,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 22345,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_TransitionTime = 22346,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 22347,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_TrueState = 22348,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_FalseState = 22349,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState = 22350,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Id = 22351,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Name = 22352,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Number = 22353,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 22354,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_TransitionTime = 22355,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 22356,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_TrueState = 22357,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_FalseState = 22358,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState = 22359,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState = 22360,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Id = 22361,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Name = 22362,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Number = 22363,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 22364,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition = 22365,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Id = 22366,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Name = 22367,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Number = 22368,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 22369,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 22370,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_AvailableStates = 22371,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_AvailableTransitions = 22372,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_UnshelveTime = 22373,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve = 22374,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 22375,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve = 22376,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve = 22377,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedOrShelved = 22378,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_MaxTimeShelved = 22379,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleEnabled = 22380,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleSound = 22381,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleSound_ListId = 22382,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleSound_AgencyId = 22383,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleSound_VersionId = 22384,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState = 22385,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_Id = 22386,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_Name = 22387,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_Number = 22388,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 22389,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_TransitionTime = 22390,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 22391,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_TrueState = 22392,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_FalseState = 22393,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OnDelay = 22394,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OffDelay = 22395,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_FirstInGroupFlag = 22396,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_FirstInGroup = 22397,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState = 22398,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_Id = 22399,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_Name = 22400,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_Number = 22401,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 22402,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_TransitionTime = 22403,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 22404,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_TrueState = 22405,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_FalseState = 22406,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ReAlarmTime = 22407,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ReAlarmRepeatCount = 22408,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Silence = 22409,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Suppress = 22410,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Unsuppress = 22411,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_RemoveFromService = 22412,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_PlaceInService = 22413,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Reset = 22414,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_NormalState = 22415,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ExpirationDate = 22416,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ExpirationLimit = 22417,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_CertificateType = 22418,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Certificate = 22419,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate = 22420,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EventId = 22421,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EventType = 22422,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SourceNode = 22423,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SourceName = 22424,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Time = 22425,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ReceiveTime = 22426,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LocalTime = 22427,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Message = 22428,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Severity = 22429,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionClassId = 22430,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionClassName = 22431,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionSubClassId = 22432,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionSubClassName = 22433,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionName = 22434,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_BranchId = 22435,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Retain = 22436,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState = 22437,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Id = 22438,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Name = 22439,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Number = 22440,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 22441,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_TransitionTime = 22442,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 22443,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_TrueState = 22444,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_FalseState = 22445,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Quality = 22446,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Quality_SourceTimestamp = 22447,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LastSeverity = 22448,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 22449,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Comment = 22450,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Comment_SourceTimestamp = 22451,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ClientUserId = 22452,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Disable = 22453,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Enable = 22454,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AddComment = 22455,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AddComment_InputArguments = 22456,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState = 22457,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Id = 22458,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Name = 22459,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Number = 22460,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 22461,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_TransitionTime = 22462,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 22463,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_TrueState = 22464,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_FalseState = 22465,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState = 22466,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Id = 22467,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Name = 22468,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Number = 22469,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 22470,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 22471,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 22472,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_TrueState = 22473,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_FalseState = 22474,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Acknowledge = 22475,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Acknowledge_InputArguments = 22476,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Confirm = 22477,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Confirm_InputArguments = 22478,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState = 22479,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Id = 22480,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Name = 22481,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Number = 22482,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 22483,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_TransitionTime = 22484,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 22485,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_TrueState = 22486,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_FalseState = 22487,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_InputNode = 22488,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState = 22489,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Id = 22490,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Name = 22491,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Number = 22492,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 22493,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 22494,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 22495,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_TrueState = 22496,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_FalseState = 22497,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState = 22498,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Id = 22499,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Name = 22500,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Number = 22501,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 22502,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 22503,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 22504,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 22505,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 22506,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState = 22507,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState = 22508,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 22509,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 22510,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 22511,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 22512,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition = 22513,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 22514,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 22515,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 22516,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 22517,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 22518,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 22519,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 22520,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 22521,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 22522,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 22523,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve = 22524,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 22525,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedOrShelved = 22526,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_MaxTimeShelved = 22527,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleEnabled = 22528,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound = 22529,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_ListId = 22530,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_AgencyId = 22531,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_VersionId = 22532,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState = 22533,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Id = 22534,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Name = 22535,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Number = 22536,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 22537,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_TransitionTime = 22538,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 22539,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_TrueState = 22540,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_FalseState = 22541,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OnDelay = 22542,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OffDelay = 22543,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_FirstInGroupFlag = 22544,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_FirstInGroup = 22545,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState = 22546,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Id = 22547,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Name = 22548,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Number = 22549,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 22550,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_TransitionTime = 22551,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 22552,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_TrueState = 22553,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_FalseState = 22554,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ReAlarmTime = 22555,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ReAlarmRepeatCount = 22556,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Silence = 22557,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Suppress = 22558,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress = 22559,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService = 22560,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService = 22561,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Reset = 22562,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_NormalState = 22563,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_TrustListId = 22564,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LastUpdateTime = 22565,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_UpdateFrequency = 22566,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_UpdateFrequency = 22567,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired = 22568,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EventId = 22569,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EventType = 22570,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SourceNode = 22571,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SourceName = 22572,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Time = 22573,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ReceiveTime = 22574,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LocalTime = 22575,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Message = 22576,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Severity = 22577,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionClassId = 22578,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionClassName = 22579,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionSubClassId = 22580,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionSubClassName = 22581,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConditionName = 22582,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_BranchId = 22583,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Retain = 22584,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState = 22585,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_Id = 22586,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_Name = 22587,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_Number = 22588,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 22589,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_TransitionTime = 22590,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 22591,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_TrueState = 22592,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_EnabledState_FalseState = 22593,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Quality = 22594,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Quality_SourceTimestamp = 22595,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LastSeverity = 22596,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LastSeverity_SourceTimestamp = 22597,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Comment = 22598,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Comment_SourceTimestamp = 22599,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ClientUserId = 22600,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Disable = 22601,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Enable = 22602,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AddComment = 22603,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AddComment_InputArguments = 22604,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState = 22605,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_Id = 22606,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_Name = 22607,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_Number = 22608,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_EffectiveDisplayName = 22609,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_TransitionTime = 22610,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 22611,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_TrueState = 22612,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AckedState_FalseState = 22613,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState = 22614,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Id = 22615,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Name = 22616,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_Number = 22617,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 22618,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_TransitionTime = 22619,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 22620,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_TrueState = 22621,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ConfirmedState_FalseState = 22622,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Acknowledge = 22623,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Acknowledge_InputArguments = 22624,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Confirm = 22625,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Confirm_InputArguments = 22626,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState = 22627,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_Id = 22628,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_Name = 22629,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_Number = 22630,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 22631,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_TransitionTime = 22632,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 22633,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_TrueState = 22634,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ActiveState_FalseState = 22635,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_InputNode = 22636,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState = 22637,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_Id = 22638,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_Name = 22639,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_Number = 22640,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 22641,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_TransitionTime = 22642,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 22643,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_TrueState = 22644,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedState_FalseState = 22645,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState = 22646,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Id = 22647,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Name = 22648,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_Number = 22649,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 22650,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_TransitionTime = 22651,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 22652,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_TrueState = 22653,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OutOfServiceState_FalseState = 22654,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState = 22655,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState = 22656,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Id = 22657,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Name = 22658,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_Number = 22659,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 22660,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition = 22661,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Id = 22662,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Name = 22663,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_Number = 22664,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 22665,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 22666,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_AvailableStates = 22667,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_AvailableTransitions = 22668,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_UnshelveTime = 22669,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve = 22670,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 22671,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve = 22672,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve = 22673,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SuppressedOrShelved = 22674,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_MaxTimeShelved = 22675,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleEnabled = 22676,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleSound = 22677,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleSound_ListId = 22678,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleSound_AgencyId = 22679,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_AudibleSound_VersionId = 22680,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState = 22681,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_Id = 22682,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_Name = 22683,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_Number = 22684,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 22685,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_TransitionTime = 22686,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 22687,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_TrueState = 22688,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_SilenceState_FalseState = 22689,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OnDelay = 22690,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_OffDelay = 22691,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_FirstInGroupFlag = 22692,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_FirstInGroup = 22693,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState = 22694,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_Id = 22695,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_Name = 22696,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_Number = 22697,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 22698,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_TransitionTime = 22699,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 22700,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_TrueState = 22701,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_LatchedState_FalseState = 22702,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ReAlarmTime = 22703,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ReAlarmRepeatCount = 22704,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Silence = 22705,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Suppress = 22706,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Unsuppress = 22707,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_RemoveFromService = 22708,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_PlaceInService = 22709,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Reset = 22710,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_NormalState = 22711,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ExpirationDate = 22712,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ExpirationLimit = 22713,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_CertificateType = 22714,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Certificate = 22715,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate = 22716,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EventId = 22717,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EventType = 22718,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SourceNode = 22719,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SourceName = 22720,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Time = 22721,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ReceiveTime = 22722,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LocalTime = 22723,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Message = 22724,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Severity = 22725,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionClassId = 22726,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionClassName = 22727,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionSubClassId = 22728,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionSubClassName = 22729,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConditionName = 22730,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_BranchId = 22731,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Retain = 22732,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState = 22733,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Id = 22734,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Name = 22735,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_Number = 22736,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 22737,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_TransitionTime = 22738,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 22739,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_TrueState = 22740,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_EnabledState_FalseState = 22741,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Quality = 22742,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Quality_SourceTimestamp = 22743,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LastSeverity = 22744,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 22745,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Comment = 22746,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Comment_SourceTimestamp = 22747,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ClientUserId = 22748,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Disable = 22749,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Enable = 22750,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AddComment = 22751,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AddComment_InputArguments = 22752,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState = 22753,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Id = 22754,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Name = 22755,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_Number = 22756,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 22757,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_TransitionTime = 22758,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 22759,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_TrueState = 22760,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AckedState_FalseState = 22761,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState = 22762,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Id = 22763,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Name = 22764,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_Number = 22765,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 22766,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 22767,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 22768,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_TrueState = 22769,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ConfirmedState_FalseState = 22770,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Acknowledge = 22771,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Acknowledge_InputArguments = 22772,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Confirm = 22773,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Confirm_InputArguments = 22774,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState = 22775,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Id = 22776,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Name = 22777,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_Number = 22778,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 22779,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_TransitionTime = 22780,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 22781,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_TrueState = 22782,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ActiveState_FalseState = 22783,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_InputNode = 22784,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState = 22785,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Id = 22786,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Name = 22787,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_Number = 22788,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 22789,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 22790,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 22791,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_TrueState = 22792,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedState_FalseState = 22793,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState = 22794,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Id = 22795,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Name = 22796,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_Number = 22797,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 22798,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 22799,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 22800,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 22801,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 22802,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState = 22803,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState = 22804,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 22805,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 22806,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 22807,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 22808,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition = 22809,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 22810,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 22811,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 22812,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 22813,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 22814,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 22815,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 22816,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 22817,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 22818,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 22819,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve = 22820,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 22821,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SuppressedOrShelved = 22822,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_MaxTimeShelved = 22823,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleEnabled = 22824,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound = 22825,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_ListId = 22826,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_AgencyId = 22827,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_AudibleSound_VersionId = 22828,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState = 22829,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Id = 22830,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Name = 22831,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_Number = 22832,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 22833,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_TransitionTime = 22834,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 22835,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_TrueState = 22836,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_SilenceState_FalseState = 22837,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OnDelay = 22838,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_OffDelay = 22839,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_FirstInGroupFlag = 22840,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_FirstInGroup = 22841,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState = 22842,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Id = 22843,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Name = 22844,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_Number = 22845,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 22846,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_TransitionTime = 22847,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 22848,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_TrueState = 22849,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LatchedState_FalseState = 22850,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ReAlarmTime = 22851,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ReAlarmRepeatCount = 22852,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Silence = 22853,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Suppress = 22854,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress = 22855,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService = 22856,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService = 22857,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Reset = 22858,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_NormalState = 22859,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_TrustListId = 22860,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_LastUpdateTime = 22861,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_UpdateFrequency = 22862,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_UpdateFrequency = 22863,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired = 22864,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EventId = 22865,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EventType = 22866,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SourceNode = 22867,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SourceName = 22868,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Time = 22869,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ReceiveTime = 22870,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LocalTime = 22871,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Message = 22872,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Severity = 22873,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionClassId = 22874,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionClassName = 22875,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionSubClassId = 22876,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionSubClassName = 22877,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConditionName = 22878,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_BranchId = 22879,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Retain = 22880,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState = 22881,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_Id = 22882,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_Name = 22883,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_Number = 22884,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 22885,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_TransitionTime = 22886,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 22887,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_TrueState = 22888,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_EnabledState_FalseState = 22889,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Quality = 22890,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Quality_SourceTimestamp = 22891,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LastSeverity = 22892,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LastSeverity_SourceTimestamp = 22893,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Comment = 22894,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Comment_SourceTimestamp = 22895,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ClientUserId = 22896,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Disable = 22897,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Enable = 22898,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AddComment = 22899,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AddComment_InputArguments = 22900,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState = 22901,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_Id = 22902,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_Name = 22903,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_Number = 22904,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_EffectiveDisplayName = 22905,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_TransitionTime = 22906,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 22907,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_TrueState = 22908,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AckedState_FalseState = 22909,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState = 22910,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Id = 22911,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Name = 22912,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_Number = 22913,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 22914,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_TransitionTime = 22915,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 22916,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_TrueState = 22917,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ConfirmedState_FalseState = 22918,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Acknowledge = 22919,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Acknowledge_InputArguments = 22920,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Confirm = 22921,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Confirm_InputArguments = 22922,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState = 22923,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_Id = 22924,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_Name = 22925,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_Number = 22926,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 22927,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_TransitionTime = 22928,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 22929,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_TrueState = 22930,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ActiveState_FalseState = 22931,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_InputNode = 22932,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState = 22933,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_Id = 22934,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_Name = 22935,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_Number = 22936,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 22937,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_TransitionTime = 22938,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 22939,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_TrueState = 22940,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedState_FalseState = 22941,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState = 22942,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Id = 22943,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Name = 22944,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_Number = 22945,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 22946,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_TransitionTime = 22947,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 22948,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_TrueState = 22949,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OutOfServiceState_FalseState = 22950,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState = 22951,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState = 22952,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Id = 22953,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Name = 22954,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_Number = 22955,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 22956,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition = 22957,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Id = 22958,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Name = 22959,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_Number = 22960,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 22961,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 22962,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_AvailableStates = 22963,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_AvailableTransitions = 22964,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_UnshelveTime = 22965,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve = 22966,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 22967,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve = 22968,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve = 22969,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SuppressedOrShelved = 22970,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_MaxTimeShelved = 22971,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleEnabled = 22972,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleSound = 22973,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleSound_ListId = 22974,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleSound_AgencyId = 22975,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_AudibleSound_VersionId = 22976,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState = 22977,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_Id = 22978,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_Name = 22979,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_Number = 22980,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 22981,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_TransitionTime = 22982,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 22983,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_TrueState = 22984,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_SilenceState_FalseState = 22985,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OnDelay = 22986,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_OffDelay = 22987,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_FirstInGroupFlag = 22988,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_FirstInGroup = 22989,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState = 22990,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_Id = 22991,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_Name = 22992,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_Number = 22993,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 22994,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_TransitionTime = 22995,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 22996,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_TrueState = 22997,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_LatchedState_FalseState = 22998,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ReAlarmTime = 22999,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ReAlarmRepeatCount = 23000,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Silence = 23001,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Suppress = 23002,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Unsuppress = 23003,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_RemoveFromService = 23004,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_PlaceInService = 23005,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Reset = 23006,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_NormalState = 23007,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ExpirationDate = 23008,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ExpirationLimit = 23009,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_CertificateType = 23010,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Certificate = 23011,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate = 23012,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EventId = 23013,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EventType = 23014,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SourceNode = 23015,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SourceName = 23016,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Time = 23017,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ReceiveTime = 23018,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LocalTime = 23019,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Message = 23020,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Severity = 23021,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionClassId = 23022,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionClassName = 23023,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionSubClassId = 23024,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionSubClassName = 23025,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConditionName = 23026,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_BranchId = 23027,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Retain = 23028,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState = 23029,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Id = 23030,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Name = 23031,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_Number = 23032,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 23033,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_TransitionTime = 23034,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 23035,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_TrueState = 23036,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_EnabledState_FalseState = 23037,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Quality = 23038,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Quality_SourceTimestamp = 23039,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LastSeverity = 23040,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 23041,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Comment = 23042,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Comment_SourceTimestamp = 23043,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ClientUserId = 23044,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Disable = 23045,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Enable = 23046,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AddComment = 23047,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AddComment_InputArguments = 23048,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState = 23049,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Id = 23050,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Name = 23051,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_Number = 23052,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 23053,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_TransitionTime = 23054,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 23055,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_TrueState = 23056,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AckedState_FalseState = 23057,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState = 23058,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Id = 23059,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Name = 23060,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_Number = 23061,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 23062,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 23063,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 23064,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_TrueState = 23065,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ConfirmedState_FalseState = 23066,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Acknowledge = 23067,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Acknowledge_InputArguments = 23068,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Confirm = 23069,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Confirm_InputArguments = 23070,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState = 23071,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Id = 23072,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Name = 23073,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_Number = 23074,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 23075,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_TransitionTime = 23076,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 23077,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_TrueState = 23078,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ActiveState_FalseState = 23079,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_InputNode = 23080,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState = 23081,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Id = 23082,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Name = 23083,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_Number = 23084,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 23085,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 23086,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 23087,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_TrueState = 23088,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedState_FalseState = 23089,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState = 23090,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Id = 23091,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Name = 23092,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_Number = 23093,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 23094,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 23095,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 23096,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 23097,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 23098,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState = 23099,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState = 23100,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 23101,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 23102,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 23103,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 23104,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition = 23105,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 23106,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 23107,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 23108,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 23109,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 23110,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 23111,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 23112,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 23113,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 23114,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 23115,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve = 23116,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 23117,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SuppressedOrShelved = 23118,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_MaxTimeShelved = 23119,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleEnabled = 23120,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound = 23121,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_ListId = 23122,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_AgencyId = 23123,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_AudibleSound_VersionId = 23124,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState = 23125,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Id = 23126,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Name = 23127,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_Number = 23128,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 23129,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_TransitionTime = 23130,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 23131,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_TrueState = 23132,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_SilenceState_FalseState = 23133,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OnDelay = 23134,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_OffDelay = 23135,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_FirstInGroupFlag = 23136,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_FirstInGroup = 23137,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState = 23138,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Id = 23139,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Name = 23140,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_Number = 23141,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 23142,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_TransitionTime = 23143,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 23144,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_TrueState = 23145,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LatchedState_FalseState = 23146,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ReAlarmTime = 23147,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ReAlarmRepeatCount = 23148,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Silence = 23149,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Suppress = 23150,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress = 23151,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService = 23152,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService = 23153,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Reset = 23154,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_NormalState = 23155,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_TrustListId = 23156,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_LastUpdateTime = 23157,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_UpdateFrequency = 23158,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_UpdateFrequency = 23159,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired = 23160,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EventId = 23161,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EventType = 23162,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SourceNode = 23163,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SourceName = 23164,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Time = 23165,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ReceiveTime = 23166,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LocalTime = 23167,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Message = 23168,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Severity = 23169,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionClassId = 23170,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionClassName = 23171,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionSubClassId = 23172,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionSubClassName = 23173,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConditionName = 23174,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_BranchId = 23175,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Retain = 23176,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState = 23177,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_Id = 23178,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_Name = 23179,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_Number = 23180,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_EffectiveDisplayName = 23181,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_TransitionTime = 23182,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_EffectiveTransitionTime = 23183,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_TrueState = 23184,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_EnabledState_FalseState = 23185,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Quality = 23186,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Quality_SourceTimestamp = 23187,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LastSeverity = 23188,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LastSeverity_SourceTimestamp = 23189,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Comment = 23190,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Comment_SourceTimestamp = 23191,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ClientUserId = 23192,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Disable = 23193,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Enable = 23194,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AddComment = 23195,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AddComment_InputArguments = 23196,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState = 23197,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_Id = 23198,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_Name = 23199,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_Number = 23200,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_EffectiveDisplayName = 23201,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_TransitionTime = 23202,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_EffectiveTransitionTime = 23203,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_TrueState = 23204,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AckedState_FalseState = 23205,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState = 23206,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Id = 23207,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Name = 23208,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_Number = 23209,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_EffectiveDisplayName = 23210,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_TransitionTime = 23211,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_EffectiveTransitionTime = 23212,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_TrueState = 23213,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ConfirmedState_FalseState = 23214,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Acknowledge = 23215,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Acknowledge_InputArguments = 23216,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Confirm = 23217,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Confirm_InputArguments = 23218,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState = 23219,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_Id = 23220,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_Name = 23221,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_Number = 23222,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_EffectiveDisplayName = 23223,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_TransitionTime = 23224,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_EffectiveTransitionTime = 23225,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_TrueState = 23226,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ActiveState_FalseState = 23227,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_InputNode = 23228,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState = 23229,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Id = 23230,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Name = 23231,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_Number = 23232,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_EffectiveDisplayName = 23233,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_TransitionTime = 23234,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_EffectiveTransitionTime = 23235,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_TrueState = 23236,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedState_FalseState = 23237,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState = 23238,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Id = 23239,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Name = 23240,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_Number = 23241,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_EffectiveDisplayName = 23242,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_TransitionTime = 23243,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_EffectiveTransitionTime = 23244,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_TrueState = 23245,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OutOfServiceState_FalseState = 23246,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState = 23247,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState = 23248,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Id = 23249,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Name = 23250,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_Number = 23251,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_CurrentState_EffectiveDisplayName = 23252,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition = 23253,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Id = 23254,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Name = 23255,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_Number = 23256,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_TransitionTime = 23257,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_LastTransition_EffectiveTransitionTime = 23258,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_AvailableStates = 23259,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_AvailableTransitions = 23260,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_UnshelveTime = 23261,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve = 23262,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve_InputArguments = 23263,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve = 23264,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve = 23265,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SuppressedOrShelved = 23266,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_MaxTimeShelved = 23267,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleEnabled = 23268,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleSound = 23269,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleSound_ListId = 23270,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleSound_AgencyId = 23271,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_AudibleSound_VersionId = 23272,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState = 23273,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_Id = 23274,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_Name = 23275,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_Number = 23276,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_EffectiveDisplayName = 23277,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_TransitionTime = 23278,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_EffectiveTransitionTime = 23279,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_TrueState = 23280,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_SilenceState_FalseState = 23281,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OnDelay = 23282,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_OffDelay = 23283,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_FirstInGroupFlag = 23284,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_FirstInGroup = 23285,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState = 23286,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_Id = 23287,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_Name = 23288,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_Number = 23289,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_EffectiveDisplayName = 23290,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_TransitionTime = 23291,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_EffectiveTransitionTime = 23292,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_TrueState = 23293,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_LatchedState_FalseState = 23294,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ReAlarmTime = 23295,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ReAlarmRepeatCount = 23296,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Silence = 23297,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Suppress = 23298,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Unsuppress = 23299,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_RemoveFromService = 23300,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_PlaceInService = 23301,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Reset = 23302,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_NormalState = 23303,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ExpirationDate = 23304,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ExpirationLimit = 23305,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_CertificateType = 23306,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Certificate = 23307,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate = 23308,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EventId = 23309,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EventType = 23310,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SourceNode = 23311,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SourceName = 23312,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Time = 23313,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ReceiveTime = 23314,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LocalTime = 23315,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Message = 23316,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Severity = 23317,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionClassId = 23318,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionClassName = 23319,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionSubClassId = 23320,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionSubClassName = 23321,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConditionName = 23322,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_BranchId = 23323,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Retain = 23324,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState = 23325,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Id = 23326,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Name = 23327,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_Number = 23328,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_EffectiveDisplayName = 23329,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_TransitionTime = 23330,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_EffectiveTransitionTime = 23331,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_TrueState = 23332,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_EnabledState_FalseState = 23333,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Quality = 23334,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Quality_SourceTimestamp = 23335,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LastSeverity = 23336,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LastSeverity_SourceTimestamp = 23337,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Comment = 23338,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Comment_SourceTimestamp = 23339,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ClientUserId = 23340,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Disable = 23341,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Enable = 23342,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AddComment = 23343,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AddComment_InputArguments = 23344,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState = 23345,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Id = 23346,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Name = 23347,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_Number = 23348,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_EffectiveDisplayName = 23349,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_TransitionTime = 23350,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_EffectiveTransitionTime = 23351,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_TrueState = 23352,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AckedState_FalseState = 23353,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState = 23354,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Id = 23355,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Name = 23356,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_Number = 23357,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_EffectiveDisplayName = 23358,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_TransitionTime = 23359,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_EffectiveTransitionTime = 23360,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_TrueState = 23361,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ConfirmedState_FalseState = 23362,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Acknowledge = 23363,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Acknowledge_InputArguments = 23364,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Confirm = 23365,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Confirm_InputArguments = 23366,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState = 23367,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Id = 23368,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Name = 23369,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_Number = 23370,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_EffectiveDisplayName = 23371,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_TransitionTime = 23372,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_EffectiveTransitionTime = 23373,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_TrueState = 23374,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ActiveState_FalseState = 23375,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_InputNode = 23376,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState = 23377,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Id = 23378,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Name = 23379,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_Number = 23380,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_EffectiveDisplayName = 23381,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_TransitionTime = 23382,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_EffectiveTransitionTime = 23383,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_TrueState = 23384,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedState_FalseState = 23385,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState = 23386,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Id = 23387,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Name = 23388,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_Number = 23389,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_EffectiveDisplayName = 23390,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_TransitionTime = 23391,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_EffectiveTransitionTime = 23392,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_TrueState = 23393,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OutOfServiceState_FalseState = 23394,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState = 23395,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState = 23396,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Id = 23397,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Name = 23398,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_Number = 23399,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_CurrentState_EffectiveDisplayName = 23400,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition = 23401,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Id = 23402,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Name = 23403,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_Number = 23404,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_TransitionTime = 23405,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_LastTransition_EffectiveTransitionTime = 23406,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_AvailableStates = 23407,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_AvailableTransitions = 23408,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_UnshelveTime = 23409,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve = 23410,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve_InputArguments = 23411,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve = 23412,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve = 23413,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SuppressedOrShelved = 23414,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_MaxTimeShelved = 23415,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleEnabled = 23416,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound = 23417,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_ListId = 23418,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_AgencyId = 23419,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_AudibleSound_VersionId = 23420,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState = 23421,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Id = 23422,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Name = 23423,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_Number = 23424,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_EffectiveDisplayName = 23425,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_TransitionTime = 23426,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_EffectiveTransitionTime = 23427,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_TrueState = 23428,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_SilenceState_FalseState = 23429,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OnDelay = 23430,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_OffDelay = 23431,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_FirstInGroupFlag = 23432,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_FirstInGroup = 23433,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState = 23434,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Id = 23435,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Name = 23436,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_Number = 23437,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_EffectiveDisplayName = 23438,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_TransitionTime = 23439,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_EffectiveTransitionTime = 23440,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_TrueState = 23441,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LatchedState_FalseState = 23442,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ReAlarmTime = 23443,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ReAlarmRepeatCount = 23444,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Silence = 23445,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Suppress = 23446,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress = 23447,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService = 23448,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService = 23449,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Reset = 23450,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_NormalState = 23451,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_TrustListId = 23452,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_LastUpdateTime = 23453,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_UpdateFrequency = 23454,
    AliasNameType = 23455,
    AliasNameCategoryType = 23456,
    AliasNameCategoryType_Alias_Placeholder = 23457,
    AliasNameCategoryType_SubAliasNameCategories_Placeholder = 23458,
    AliasNameCategoryType_SubAliasNameCategories_Placeholder_FindAlias = 23459,
    AliasNameCategoryType_SubAliasNameCategories_Placeholder_FindAlias_InputArguments = 23460,
    AliasNameCategoryType_SubAliasNameCategories_Placeholder_FindAlias_OutputArguments = 23461,
    AliasNameCategoryType_FindAlias = 23462,
    AliasNameCategoryType_FindAlias_InputArguments = 23463,
    AliasNameCategoryType_FindAlias_OutputArguments = 23464,
    FindAliasMethodType = 23465,
    FindAliasMethodType_InputArguments = 23466,
    FindAliasMethodType_OutputArguments = 23467,
    AliasNameDataType = 23468,
    AliasFor = 23469,
    Aliases = 23470,
    Aliases_Alias_Placeholder = 23471,
    Aliases_SubAliasNameCategories_Placeholder = 23472,
    Aliases_SubAliasNameCategories_Placeholder_FindAlias = 23473,
    Aliases_SubAliasNameCategories_Placeholder_FindAlias_InputArguments = 23474,
    Aliases_SubAliasNameCategories_Placeholder_FindAlias_OutputArguments = 23475,
    Aliases_FindAlias = 23476,
    Aliases_FindAlias_InputArguments = 23477,
    Aliases_FindAlias_OutputArguments = 23478,
    TagVariables = 23479,
    TagVariables_Alias_Placeholder = 23480,
    TagVariables_SubAliasNameCategories_Placeholder = 23481,
    TagVariables_SubAliasNameCategories_Placeholder_FindAlias = 23482,
    TagVariables_SubAliasNameCategories_Placeholder_FindAlias_InputArguments = 23483,
    TagVariables_SubAliasNameCategories_Placeholder_FindAlias_OutputArguments = 23484,
    TagVariables_FindAlias = 23485,
    TagVariables_FindAlias_InputArguments = 23486,
    TagVariables_FindAlias_OutputArguments = 23487,
    Topics = 23488,
    Topics_Alias_Placeholder = 23489,
    Topics_SubAliasNameCategories_Placeholder = 23490,
    Topics_SubAliasNameCategories_Placeholder_FindAlias = 23491,
    Topics_SubAliasNameCategories_Placeholder_FindAlias_InputArguments = 23492,
    Topics_SubAliasNameCategories_Placeholder_FindAlias_OutputArguments = 23493,
    Topics_FindAlias = 23494,
    Topics_FindAlias_InputArguments = 23495,
    Topics_FindAlias_OutputArguments = 23496,
    ReadAnnotationDataDetails = 23497,
    CurrencyUnitType = 23498,
    AliasNameDataType_Encoding_DefaultBinary = 23499,
    ReadAnnotationDataDetails_Encoding_DefaultBinary = 23500,
    CurrencyUnit = 23501,
    OpcUa_BinarySchema_AliasNameDataType = 23502,
    OpcUa_BinarySchema_AliasNameDataType_DataTypeVersion = 23503,
    OpcUa_BinarySchema_AliasNameDataType_DictionaryFragment = 23504,
    CurrencyUnitType_Encoding_DefaultBinary = 23507,
    AliasNameDataType_Encoding_DefaultJson = 23511,
    ReadAnnotationDataDetails_Encoding_DefaultJson = 23512,
    IOrderedObjectType = 23513,
    OpcUa_BinarySchema_CurrencyUnitType = 23514,
    OpcUa_BinarySchema_CurrencyUnitType_DataTypeVersion = 23515,
    OpcUa_BinarySchema_CurrencyUnitType_DictionaryFragment = 23516,
    IOrderedObjectType_NumberInList = 23517,
    OrderedListType = 23518,
    OrderedListType_OrderedObject_Placeholder = 23519,
    OrderedListType_OrderedObject_Placeholder_NumberInList = 23521,
    OrderedListType_NodeVersion = 23525,
    CertificateGroupType_GetRejectedList = 23526,
    CertificateGroupType_GetRejectedList_OutputArguments = 23527,
    CurrencyUnitType_Encoding_DefaultJson = 23528,
    CertificateGroupFolderType_DefaultApplicationGroup_GetRejectedList = 23529,
    CertificateGroupFolderType_DefaultApplicationGroup_GetRejectedList_OutputArguments = 23530,
    CertificateGroupFolderType_DefaultHttpsGroup_GetRejectedList = 23531,
    CertificateGroupFolderType_DefaultHttpsGroup_GetRejectedList_OutputArguments = 23532,
    CertificateGroupFolderType_DefaultUserTokenGroup_GetRejectedList = 23533,
    CertificateGroupFolderType_DefaultUserTokenGroup_GetRejectedList_OutputArguments = 23534,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_GetRejectedList = 23535,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_GetRejectedList_OutputArguments = 23536,
    EccApplicationCertificateType = 23537,
    EccNistP256ApplicationCertificateType = 23538,
    EccNistP384ApplicationCertificateType = 23539,
    EccBrainpoolP256r1ApplicationCertificateType = 23540,
    EccBrainpoolP384r1ApplicationCertificateType = 23541,
    EccCurve25519ApplicationCertificateType = 23542,
    EccCurve448ApplicationCertificateType = 23543,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_GetRejectedList = 23544,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_GetRejectedList_OutputArguments = 23545,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_GetRejectedList = 23546,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_GetRejectedList_OutputArguments = 23547,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_GetRejectedList = 23548,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_GetRejectedList_OutputArguments = 23549,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_GetRejectedList = 23550,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_GetRejectedList_OutputArguments = 23551,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_GetRejectedList = 23552,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_GetRejectedList_OutputArguments = 23553,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_GetRejectedList = 23554,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_GetRejectedList_OutputArguments = 23555,
    AuthorizationServicesConfigurationFolderType = 23556,
    AuthorizationServicesConfigurationFolderType_ServiceName_Placeholder = 23557,
    AuthorizationServicesConfigurationFolderType_ServiceName_Placeholder_ServiceUri = 23558,
    AuthorizationServicesConfigurationFolderType_ServiceName_Placeholder_ServiceCertificate = 23559,
    AuthorizationServicesConfigurationFolderType_ServiceName_Placeholder_IssuerEndpointUrl = 23560,
    IsDeprecated = 23562,
    TrustListValidationOptions = 23564,
    QosDataType = 23603,
    TransmitQosDataType = 23604,
    AuditClientEventType = 23606,
    ReceiveQosDataType = 23608,
    SubscribedDataSetFolderType = 23795,
    StandaloneSubscribedDataSetType = 23828,
    PubSubCapabilitiesType = 23832,
    AuditClientUpdateMethodResultEventType = 23926,
    DatagramDataSetReaderTransportType = 24016,
    HasStructuredComponent = 24136,
    AssociatedWith = 24137,
    IIetfBaseNetworkInterfaceType = 24148,
    IIeeeBaseEthernetPortType = 24158,
    IBaseEthernetCapabilitiesType = 24167,
    ISrClassType = 24169,
    IIeeeBaseTsnStreamType = 24173,
    IIeeeBaseTsnTrafficSpecificationType = 24179,
    IIeeeBaseTsnStatusStreamType = 24183,
    IIeeeTsnInterfaceConfigurationType = 24188,
    IIeeeTsnInterfaceConfigurationTalkerType = 24191,
    IIeeeTsnInterfaceConfigurationListenerType = 24195,
    IIeeeTsnMacAddressType = 24199,
    IIeeeTsnVlanTagType = 24202,
    IPriorityMappingEntryType = 24205,
    IIeeeAutoNegotiationStatusType = 24233,
    UserManagementType = 24264,
    PasswordOptionsMask = 24277,
    UserManagementDataType = 24281,
    ExclusiveRateOfChangeAlarmType_Unsuppress2_InputArguments = 24421,
    ExclusiveRateOfChangeAlarmType_RemoveFromService2 = 24422,
    ExclusiveRateOfChangeAlarmType_RemoveFromService2_InputArguments = 24423,
    ExclusiveRateOfChangeAlarmType_PlaceInService2 = 24424,
    ExclusiveRateOfChangeAlarmType_PlaceInService2_InputArguments = 24425,
    ExclusiveRateOfChangeAlarmType_Reset2 = 24426,
    ExclusiveRateOfChangeAlarmType_Reset2_InputArguments = 24427,
    DiscreteAlarmType_Suppress2 = 24428,
    DiscreteAlarmType_Suppress2_InputArguments = 24429,
    DiscreteAlarmType_Unsuppress2 = 24430,
    DiscreteAlarmType_Unsuppress2_InputArguments = 24431,
    DiscreteAlarmType_RemoveFromService2 = 24432,
    DiscreteAlarmType_RemoveFromService2_InputArguments = 24433,
    DiscreteAlarmType_PlaceInService2 = 24434,
    DiscreteAlarmType_PlaceInService2_InputArguments = 24435,
    DiscreteAlarmType_Reset2 = 24436,
    DiscreteAlarmType_Reset2_InputArguments = 24437,
    OffNormalAlarmType_Suppress2 = 24438,
    OffNormalAlarmType_Suppress2_InputArguments = 24439,
    OffNormalAlarmType_Unsuppress2 = 24440,
    OffNormalAlarmType_Unsuppress2_InputArguments = 24441,
    OffNormalAlarmType_RemoveFromService2 = 24442,
    OffNormalAlarmType_RemoveFromService2_InputArguments = 24443,
    OffNormalAlarmType_PlaceInService2 = 24444,
    OffNormalAlarmType_PlaceInService2_InputArguments = 24445,
    OffNormalAlarmType_Reset2 = 24446,
    OffNormalAlarmType_Reset2_InputArguments = 24447,
    SystemOffNormalAlarmType_Suppress2 = 24448,
    SystemOffNormalAlarmType_Suppress2_InputArguments = 24449,
    SystemOffNormalAlarmType_Unsuppress2 = 24450,
    SystemOffNormalAlarmType_Unsuppress2_InputArguments = 24451,
    SystemOffNormalAlarmType_RemoveFromService2 = 24452,
    SystemOffNormalAlarmType_RemoveFromService2_InputArguments = 24453,
    SystemOffNormalAlarmType_PlaceInService2 = 24454,
    SystemOffNormalAlarmType_PlaceInService2_InputArguments = 24455,
    SystemOffNormalAlarmType_Reset2 = 24456,
    SystemOffNormalAlarmType_Reset2_InputArguments = 24457,
    TripAlarmType_Suppress2 = 24458,
    TripAlarmType_Suppress2_InputArguments = 24459,
    TripAlarmType_Unsuppress2 = 24460,
    TripAlarmType_Unsuppress2_InputArguments = 24461,
    TripAlarmType_RemoveFromService2 = 24462,
    TripAlarmType_RemoveFromService2_InputArguments = 24463,
    TripAlarmType_PlaceInService2 = 24464,
    TripAlarmType_PlaceInService2_InputArguments = 24465,
    TripAlarmType_Reset2 = 24466,
    TripAlarmType_Reset2_InputArguments = 24467,
    InstrumentDiagnosticAlarmType_Suppress2 = 24468,
    InstrumentDiagnosticAlarmType_Suppress2_InputArguments = 24469,
    InstrumentDiagnosticAlarmType_Unsuppress2 = 24470,
    InstrumentDiagnosticAlarmType_Unsuppress2_InputArguments = 24471,
    InstrumentDiagnosticAlarmType_RemoveFromService2 = 24472,
    InstrumentDiagnosticAlarmType_RemoveFromService2_InputArguments = 24473,
    InstrumentDiagnosticAlarmType_PlaceInService2 = 24474,
    InstrumentDiagnosticAlarmType_PlaceInService2_InputArguments = 24475,
    InstrumentDiagnosticAlarmType_Reset2 = 24476,
    InstrumentDiagnosticAlarmType_Reset2_InputArguments = 24477,
    SystemDiagnosticAlarmType_Suppress2 = 24478,
    SystemDiagnosticAlarmType_Suppress2_InputArguments = 24479,
    SystemDiagnosticAlarmType_Unsuppress2 = 24480,
    SystemDiagnosticAlarmType_Unsuppress2_InputArguments = 24481,
    SystemDiagnosticAlarmType_RemoveFromService2 = 24482,
    SystemDiagnosticAlarmType_RemoveFromService2_InputArguments = 24483,
    SystemDiagnosticAlarmType_PlaceInService2 = 24484,
    SystemDiagnosticAlarmType_PlaceInService2_InputArguments = 24485,
    SystemDiagnosticAlarmType_Reset2 = 24486,
    SystemDiagnosticAlarmType_Reset2_InputArguments = 24487,
    CertificateExpirationAlarmType_Suppress2 = 24488,
    CertificateExpirationAlarmType_Suppress2_InputArguments = 24489,
    CertificateExpirationAlarmType_Unsuppress2 = 24490,
    CertificateExpirationAlarmType_Unsuppress2_InputArguments = 24491,
    CertificateExpirationAlarmType_RemoveFromService2 = 24492,
    CertificateExpirationAlarmType_RemoveFromService2_InputArguments = 24493,
    CertificateExpirationAlarmType_PlaceInService2 = 24494,
    CertificateExpirationAlarmType_PlaceInService2_InputArguments = 24495,
    CertificateExpirationAlarmType_Reset2 = 24496,
    CertificateExpirationAlarmType_Reset2_InputArguments = 24497,
    DiscrepancyAlarmType_Suppress2 = 24498,
    DiscrepancyAlarmType_Suppress2_InputArguments = 24499,
    DiscrepancyAlarmType_Unsuppress2 = 24500,
    DiscrepancyAlarmType_Unsuppress2_InputArguments = 24501,
    DiscrepancyAlarmType_RemoveFromService2 = 24502,
    DiscrepancyAlarmType_RemoveFromService2_InputArguments = 24503,
    DiscrepancyAlarmType_PlaceInService2 = 24504,
    DiscrepancyAlarmType_PlaceInService2_InputArguments = 24505,
    DiscrepancyAlarmType_Reset2 = 24506,
    DiscrepancyAlarmType_Reset2_InputArguments = 24507,
    TrustListOutOfDateAlarmType_Suppress2 = 24508,
    TrustListOutOfDateAlarmType_Suppress2_InputArguments = 24509,
    TrustListOutOfDateAlarmType_Unsuppress2 = 24510,
    TrustListOutOfDateAlarmType_Unsuppress2_InputArguments = 24511,
    TrustListOutOfDateAlarmType_RemoveFromService2 = 24512,
    TrustListOutOfDateAlarmType_RemoveFromService2_InputArguments = 24513,
    TrustListOutOfDateAlarmType_PlaceInService2 = 24514,
    TrustListOutOfDateAlarmType_PlaceInService2_InputArguments = 24515,
    TrustListOutOfDateAlarmType_Reset2 = 24516,
    TrustListOutOfDateAlarmType_Reset2_InputArguments = 24517,
    CertificateGroupType_CertificateExpired_Suppress2 = 24518,
    CertificateGroupType_CertificateExpired_Suppress2_InputArguments = 24519,
    CertificateGroupType_CertificateExpired_Unsuppress2 = 24520,
    CertificateGroupType_CertificateExpired_Unsuppress2_InputArguments = 24521,
    CertificateGroupType_CertificateExpired_RemoveFromService2 = 24522,
    CertificateGroupType_CertificateExpired_RemoveFromService2_InputArguments = 24523,
    CertificateGroupType_CertificateExpired_PlaceInService2 = 24524,
    CertificateGroupType_CertificateExpired_PlaceInService2_InputArguments = 24525,
    CertificateGroupType_CertificateExpired_Reset2 = 24526,
    CertificateGroupType_CertificateExpired_Reset2_InputArguments = 24527,
    CertificateGroupType_TrustListOutOfDate_Suppress2 = 24528,
    CertificateGroupType_TrustListOutOfDate_Suppress2_InputArguments = 24529,
    CertificateGroupType_TrustListOutOfDate_Unsuppress2 = 24530,
    CertificateGroupType_TrustListOutOfDate_Unsuppress2_InputArguments = 24531,
    CertificateGroupType_TrustListOutOfDate_RemoveFromService2 = 24532,
    CertificateGroupType_TrustListOutOfDate_RemoveFromService2_InputArguments = 24533,
    CertificateGroupType_TrustListOutOfDate_PlaceInService2 = 24534,
    CertificateGroupType_TrustListOutOfDate_PlaceInService2_InputArguments = 24535,
    CertificateGroupType_TrustListOutOfDate_Reset2 = 24536,
    CertificateGroupType_TrustListOutOfDate_Reset2_InputArguments = 24537,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Suppress2 = 24538,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Suppress2_InputArguments = 24539,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Unsuppress2 = 24540,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Unsuppress2_InputArguments = 24541,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_RemoveFromService2 = 24542,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_RemoveFromService2_InputArguments = 24543,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_PlaceInService2 = 24544,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_PlaceInService2_InputArguments = 24545,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Reset2 = 24546,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_Reset2_InputArguments = 24547,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Suppress2 = 24548,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Suppress2_InputArguments = 24549,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress2 = 24550,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24551,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService2 = 24552,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24553,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService2 = 24554,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24555,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Reset2 = 24556,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_Reset2_InputArguments = 24557,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Suppress2 = 24558,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Suppress2_InputArguments = 24559,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Unsuppress2 = 24560,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Unsuppress2_InputArguments = 24561,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_RemoveFromService2 = 24562,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_RemoveFromService2_InputArguments = 24563,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_PlaceInService2 = 24564,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_PlaceInService2_InputArguments = 24565,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Reset2 = 24566,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_Reset2_InputArguments = 24567,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Suppress2 = 24568,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Suppress2_InputArguments = 24569,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress2 = 24570,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24571,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService2 = 24572,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24573,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService2 = 24574,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24575,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Reset2 = 24576,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_Reset2_InputArguments = 24577,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Suppress2 = 24578,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Suppress2_InputArguments = 24579,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Unsuppress2 = 24580,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Unsuppress2_InputArguments = 24581,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_RemoveFromService2 = 24582,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_RemoveFromService2_InputArguments = 24583,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_PlaceInService2 = 24584,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_PlaceInService2_InputArguments = 24585,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Reset2 = 24586,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_Reset2_InputArguments = 24587,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Suppress2 = 24588,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Suppress2_InputArguments = 24589,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress2 = 24590,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24591,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService2 = 24592,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24593,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService2 = 24594,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24595,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Reset2 = 24596,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_Reset2_InputArguments = 24597,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Suppress2 = 24598,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Suppress2_InputArguments = 24599,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Unsuppress2 = 24600,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Unsuppress2_InputArguments = 24601,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_RemoveFromService2 = 24602,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_RemoveFromService2_InputArguments = 24603,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_PlaceInService2 = 24604,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_PlaceInService2_InputArguments = 24605,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Reset2 = 24606,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_Reset2_InputArguments = 24607,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Suppress2 = 24608,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Suppress2_InputArguments = 24609,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Unsuppress2 = 24610,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Unsuppress2_InputArguments = 24611,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_RemoveFromService2 = 24612,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_RemoveFromService2_InputArguments = 24613,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_PlaceInService2 = 24614,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_PlaceInService2_InputArguments = 24615,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Reset2 = 24616,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_Reset2_InputArguments = 24617,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Suppress2 = 24618,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Suppress2_InputArguments = 24619,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Unsuppress2 = 24620,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Unsuppress2_InputArguments = 24621,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_RemoveFromService2 = 24622,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_RemoveFromService2_InputArguments = 24623,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_PlaceInService2 = 24624,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_PlaceInService2_InputArguments = 24625,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Reset2 = 24626,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Reset2_InputArguments = 24627,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Suppress2 = 24628,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Suppress2_InputArguments = 24629,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress2 = 24630,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24631,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService2 = 24632,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24633,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService2 = 24634,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24635,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Reset2 = 24636,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Reset2_InputArguments = 24637,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Suppress2 = 24638,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Suppress2_InputArguments = 24639,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Unsuppress2 = 24640,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Unsuppress2_InputArguments = 24641,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_RemoveFromService2 = 24642,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_RemoveFromService2_InputArguments = 24643,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_PlaceInService2 = 24644,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_PlaceInService2_InputArguments = 24645,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Reset2 = 24646,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Reset2_InputArguments = 24647,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Suppress2 = 24648,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Suppress2_InputArguments = 24649,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress2 = 24650,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24651,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService2 = 24652,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24653,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService2 = 24654,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24655,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Reset2 = 24656,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Reset2_InputArguments = 24657,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Suppress2 = 24658,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Suppress2_InputArguments = 24659,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Unsuppress2 = 24660,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Unsuppress2_InputArguments = 24661,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_RemoveFromService2 = 24662,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_RemoveFromService2_InputArguments = 24663,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_PlaceInService2 = 24664,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_PlaceInService2_InputArguments = 24665,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Reset2 = 24666,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Reset2_InputArguments = 24667,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Suppress2 = 24668,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Suppress2_InputArguments = 24669,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress2 = 24670,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24671,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService2 = 24672,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24673,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService2 = 24674,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24675,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Reset2 = 24676,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Reset2_InputArguments = 24677,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Suppress2 = 24678,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Suppress2_InputArguments = 24679,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Unsuppress2 = 24680,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Unsuppress2_InputArguments = 24681,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_RemoveFromService2 = 24682,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_RemoveFromService2_InputArguments = 24683,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_PlaceInService2 = 24684,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_PlaceInService2_InputArguments = 24685,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Reset2 = 24686,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_Reset2_InputArguments = 24687,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Suppress2 = 24688,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Suppress2_InputArguments = 24689,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress2 = 24690,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24691,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService2 = 24692,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24693,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService2 = 24694,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24695,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Reset2 = 24696,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_Reset2_InputArguments = 24697,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Suppress2 = 24698,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Suppress2_InputArguments = 24699,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Unsuppress2 = 24700,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Unsuppress2_InputArguments = 24701,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_RemoveFromService2 = 24702,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_RemoveFromService2_InputArguments = 24703,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_PlaceInService2 = 24704,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_PlaceInService2_InputArguments = 24705,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Reset2 = 24706,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_Reset2_InputArguments = 24707,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Suppress2 = 24708,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Suppress2_InputArguments = 24709,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress2 = 24710,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24711,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService2 = 24712,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24713,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService2 = 24714,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24715,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Reset2 = 24716,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_Reset2_InputArguments = 24717,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Suppress2 = 24718,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Suppress2_InputArguments = 24719,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Unsuppress2 = 24720,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Unsuppress2_InputArguments = 24721,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_RemoveFromService2 = 24722,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_RemoveFromService2_InputArguments = 24723,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_PlaceInService2 = 24724,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_PlaceInService2_InputArguments = 24725,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Reset2 = 24726,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_Reset2_InputArguments = 24727,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Suppress2 = 24728,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Suppress2_InputArguments = 24729,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress2 = 24730,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Unsuppress2_InputArguments = 24731,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService2 = 24732,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_RemoveFromService2_InputArguments = 24733,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService2 = 24734,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_PlaceInService2_InputArguments = 24735,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Reset2 = 24736,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_Reset2_InputArguments = 24737,
    AlarmConditionType_ShelvingState_TimedShelve2 = 24738,
    AlarmConditionType_ShelvingState_TimedShelve2_InputArguments = 24739,
    AlarmConditionType_ShelvingState_Unshelve2 = 24740,
    AlarmConditionType_ShelvingState_Unshelve2_InputArguments = 24741,
    AlarmConditionType_ShelvingState_OneShotShelve2 = 24742,
    AlarmConditionType_ShelvingState_OneShotShelve2_InputArguments = 24743,
    AlarmConditionType_GetGroupMemberships = 24744,
    GetGroupMembershipsMethodType = 24746,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_TimedShelve2 = 24748,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_TimedShelve2_InputArguments = 24749,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_Unshelve2 = 24750,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_Unshelve2_InputArguments = 24751,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_OneShotShelve2 = 24752,
    AlarmGroupType_AlarmConditionInstance_Placeholder_ShelvingState_OneShotShelve2_InputArguments = 24753,
    AlarmGroupType_AlarmConditionInstance_Placeholder_GetGroupMemberships = 24754,
    ShelvedStateMachineType_TimedShelve2 = 24756,
    ShelvedStateMachineType_TimedShelve2_InputArguments = 24757,
    ShelvedStateMachineType_Unshelve2 = 24758,
    ShelvedStateMachineType_Unshelve2_InputArguments = 24759,
    ShelvedStateMachineType_OneShotShelve2 = 24760,
    ShelvedStateMachineType_OneShotShelve2_InputArguments = 24761,
    LimitAlarmType_ShelvingState_TimedShelve2 = 24762,
    LimitAlarmType_ShelvingState_TimedShelve2_InputArguments = 24763,
    LimitAlarmType_ShelvingState_Unshelve2 = 24764,
    LimitAlarmType_ShelvingState_Unshelve2_InputArguments = 24765,
    LimitAlarmType_ShelvingState_OneShotShelve2 = 24766,
    LimitAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24767,
    LimitAlarmType_GetGroupMemberships = 24768,
    LimitAlarmType_SeverityHighHigh = 24770,
    LimitAlarmType_SeverityHigh = 24771,
    LimitAlarmType_SeverityLow = 24772,
    LimitAlarmType_SeverityLowLow = 24773,
    LimitAlarmType_HighHighDeadband = 24774,
    LimitAlarmType_HighDeadband = 24775,
    LimitAlarmType_LowDeadband = 24776,
    LimitAlarmType_LowLowDeadband = 24777,
    ExclusiveLimitAlarmType_ShelvingState_TimedShelve2 = 24778,
    ExclusiveLimitAlarmType_ShelvingState_TimedShelve2_InputArguments = 24779,
    ExclusiveLimitAlarmType_ShelvingState_Unshelve2 = 24780,
    ExclusiveLimitAlarmType_ShelvingState_Unshelve2_InputArguments = 24781,
    ExclusiveLimitAlarmType_ShelvingState_OneShotShelve2 = 24782,
    ExclusiveLimitAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24783,
    ExclusiveLimitAlarmType_GetGroupMemberships = 24784,
    ExclusiveLimitAlarmType_SeverityHighHigh = 24786,
    ExclusiveLimitAlarmType_SeverityHigh = 24787,
    ExclusiveLimitAlarmType_SeverityLow = 24788,
    ExclusiveLimitAlarmType_SeverityLowLow = 24789,
    ExclusiveLimitAlarmType_HighHighDeadband = 24790,
    ExclusiveLimitAlarmType_HighDeadband = 24791,
    ExclusiveLimitAlarmType_LowDeadband = 24792,
    ExclusiveLimitAlarmType_LowLowDeadband = 24793,
    NonExclusiveLimitAlarmType_ShelvingState_TimedShelve2 = 24794,
    NonExclusiveLimitAlarmType_ShelvingState_TimedShelve2_InputArguments = 24795,
    NonExclusiveLimitAlarmType_ShelvingState_Unshelve2 = 24796,
    NonExclusiveLimitAlarmType_ShelvingState_Unshelve2_InputArguments = 24797,
    NonExclusiveLimitAlarmType_ShelvingState_OneShotShelve2 = 24798,
    NonExclusiveLimitAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24799,
    NonExclusiveLimitAlarmType_GetGroupMemberships = 24800,
    NonExclusiveLimitAlarmType_SeverityHighHigh = 24802,
    NonExclusiveLimitAlarmType_SeverityHigh = 24803,
    NonExclusiveLimitAlarmType_SeverityLow = 24804,
    NonExclusiveLimitAlarmType_SeverityLowLow = 24805,
    NonExclusiveLimitAlarmType_HighHighDeadband = 24806,
    NonExclusiveLimitAlarmType_HighDeadband = 24807,
    NonExclusiveLimitAlarmType_LowDeadband = 24808,
    NonExclusiveLimitAlarmType_LowLowDeadband = 24809,
    NonExclusiveLevelAlarmType_ShelvingState_TimedShelve2 = 24810,
    NonExclusiveLevelAlarmType_ShelvingState_TimedShelve2_InputArguments = 24811,
    NonExclusiveLevelAlarmType_ShelvingState_Unshelve2 = 24812,
    NonExclusiveLevelAlarmType_ShelvingState_Unshelve2_InputArguments = 24813,
    NonExclusiveLevelAlarmType_ShelvingState_OneShotShelve2 = 24814,
    NonExclusiveLevelAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24815,
    NonExclusiveLevelAlarmType_GetGroupMemberships = 24816,
    NonExclusiveLevelAlarmType_SeverityHighHigh = 24818,
    NonExclusiveLevelAlarmType_SeverityHigh = 24819,
    NonExclusiveLevelAlarmType_SeverityLow = 24820,
    NonExclusiveLevelAlarmType_SeverityLowLow = 24821,
    NonExclusiveLevelAlarmType_HighHighDeadband = 24822,
    NonExclusiveLevelAlarmType_HighDeadband = 24823,
    NonExclusiveLevelAlarmType_LowDeadband = 24824,
    NonExclusiveLevelAlarmType_LowLowDeadband = 24825,
    ExclusiveLevelAlarmType_ShelvingState_TimedShelve2 = 24826,
    ExclusiveLevelAlarmType_ShelvingState_TimedShelve2_InputArguments = 24827,
    ExclusiveLevelAlarmType_ShelvingState_Unshelve2 = 24828,
    ExclusiveLevelAlarmType_ShelvingState_Unshelve2_InputArguments = 24829,
    ExclusiveLevelAlarmType_ShelvingState_OneShotShelve2 = 24830,
    ExclusiveLevelAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24831,
    ExclusiveLevelAlarmType_GetGroupMemberships = 24832,
    ExclusiveLevelAlarmType_SeverityHighHigh = 24834,
    ExclusiveLevelAlarmType_SeverityHigh = 24835,
    ExclusiveLevelAlarmType_SeverityLow = 24836,
    ExclusiveLevelAlarmType_SeverityLowLow = 24837,
    ExclusiveLevelAlarmType_HighHighDeadband = 24838,
    ExclusiveLevelAlarmType_HighDeadband = 24839,
    ExclusiveLevelAlarmType_LowDeadband = 24840,
    ExclusiveLevelAlarmType_LowLowDeadband = 24841,
    NonExclusiveDeviationAlarmType_ShelvingState_TimedShelve2 = 24842,
    NonExclusiveDeviationAlarmType_ShelvingState_TimedShelve2_InputArguments = 24843,
    NonExclusiveDeviationAlarmType_ShelvingState_Unshelve2 = 24844,
    NonExclusiveDeviationAlarmType_ShelvingState_Unshelve2_InputArguments = 24845,
    NonExclusiveDeviationAlarmType_ShelvingState_OneShotShelve2 = 24846,
    NonExclusiveDeviationAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24847,
    NonExclusiveDeviationAlarmType_GetGroupMemberships = 24848,
    NonExclusiveDeviationAlarmType_SeverityHighHigh = 24850,
    NonExclusiveDeviationAlarmType_SeverityHigh = 24851,
    NonExclusiveDeviationAlarmType_SeverityLow = 24852,
    NonExclusiveDeviationAlarmType_SeverityLowLow = 24853,
    NonExclusiveDeviationAlarmType_HighHighDeadband = 24854,
    NonExclusiveDeviationAlarmType_HighDeadband = 24855,
    NonExclusiveDeviationAlarmType_LowDeadband = 24856,
    NonExclusiveDeviationAlarmType_LowLowDeadband = 24857,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_TimedShelve2 = 24858,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_TimedShelve2_InputArguments = 24859,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_Unshelve2 = 24860,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_Unshelve2_InputArguments = 24861,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_OneShotShelve2 = 24862,
    NonExclusiveRateOfChangeAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24863,
    NonExclusiveRateOfChangeAlarmType_GetGroupMemberships = 24864,
    NonExclusiveRateOfChangeAlarmType_SeverityHighHigh = 24866,
    NonExclusiveRateOfChangeAlarmType_SeverityHigh = 24867,
    NonExclusiveRateOfChangeAlarmType_SeverityLow = 24868,
    NonExclusiveRateOfChangeAlarmType_SeverityLowLow = 24869,
    NonExclusiveRateOfChangeAlarmType_HighHighDeadband = 24870,
    NonExclusiveRateOfChangeAlarmType_HighDeadband = 24871,
    NonExclusiveRateOfChangeAlarmType_LowDeadband = 24872,
    NonExclusiveRateOfChangeAlarmType_LowLowDeadband = 24873,
    ExclusiveDeviationAlarmType_ShelvingState_TimedShelve2 = 24874,
    ExclusiveDeviationAlarmType_ShelvingState_TimedShelve2_InputArguments = 24875,
    ExclusiveDeviationAlarmType_ShelvingState_Unshelve2 = 24876,
    ExclusiveDeviationAlarmType_ShelvingState_Unshelve2_InputArguments = 24877,
    ExclusiveDeviationAlarmType_ShelvingState_OneShotShelve2 = 24878,
    ExclusiveDeviationAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24879,
    ExclusiveDeviationAlarmType_GetGroupMemberships = 24880,
    ExclusiveDeviationAlarmType_SeverityHighHigh = 24882,
    ExclusiveDeviationAlarmType_SeverityHigh = 24883,
    ExclusiveDeviationAlarmType_SeverityLow = 24884,
    ExclusiveDeviationAlarmType_SeverityLowLow = 24885,
    ExclusiveDeviationAlarmType_HighHighDeadband = 24886,
    ExclusiveDeviationAlarmType_HighDeadband = 24887,
    ExclusiveDeviationAlarmType_LowDeadband = 24888,
    ExclusiveDeviationAlarmType_LowLowDeadband = 24889,
    ExclusiveRateOfChangeAlarmType_ShelvingState_TimedShelve2 = 24890,
    ExclusiveRateOfChangeAlarmType_ShelvingState_TimedShelve2_InputArguments = 24891,
    ExclusiveRateOfChangeAlarmType_ShelvingState_Unshelve2 = 24892,
    ExclusiveRateOfChangeAlarmType_ShelvingState_Unshelve2_InputArguments = 24893,
    ExclusiveRateOfChangeAlarmType_ShelvingState_OneShotShelve2 = 24894,
    ExclusiveRateOfChangeAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24895,
    ExclusiveRateOfChangeAlarmType_GetGroupMemberships = 24896,
    ExclusiveRateOfChangeAlarmType_SeverityHighHigh = 24898,
    ExclusiveRateOfChangeAlarmType_SeverityHigh = 24899,
    ExclusiveRateOfChangeAlarmType_SeverityLow = 24900,
    ExclusiveRateOfChangeAlarmType_SeverityLowLow = 24901,
    ExclusiveRateOfChangeAlarmType_HighHighDeadband = 24902,
    ExclusiveRateOfChangeAlarmType_HighDeadband = 24903,
    ExclusiveRateOfChangeAlarmType_LowDeadband = 24904,
    ExclusiveRateOfChangeAlarmType_LowLowDeadband = 24905,
    DiscreteAlarmType_ShelvingState_TimedShelve2 = 24906,
    DiscreteAlarmType_ShelvingState_TimedShelve2_InputArguments = 24907,
    DiscreteAlarmType_ShelvingState_Unshelve2 = 24908,
    DiscreteAlarmType_ShelvingState_Unshelve2_InputArguments = 24909,
    DiscreteAlarmType_ShelvingState_OneShotShelve2 = 24910,
    DiscreteAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24911,
    DiscreteAlarmType_GetGroupMemberships = 24912,
    OffNormalAlarmType_ShelvingState_TimedShelve2 = 24914,
    OffNormalAlarmType_ShelvingState_TimedShelve2_InputArguments = 24915,
    OffNormalAlarmType_ShelvingState_Unshelve2 = 24916,
    OffNormalAlarmType_ShelvingState_Unshelve2_InputArguments = 24917,
    OffNormalAlarmType_ShelvingState_OneShotShelve2 = 24918,
    OffNormalAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24919,
    OffNormalAlarmType_GetGroupMemberships = 24920,
    SystemOffNormalAlarmType_ShelvingState_TimedShelve2 = 24922,
    SystemOffNormalAlarmType_ShelvingState_TimedShelve2_InputArguments = 24923,
    SystemOffNormalAlarmType_ShelvingState_Unshelve2 = 24924,
    SystemOffNormalAlarmType_ShelvingState_Unshelve2_InputArguments = 24925,
    SystemOffNormalAlarmType_ShelvingState_OneShotShelve2 = 24926,
    SystemOffNormalAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24927,
    SystemOffNormalAlarmType_GetGroupMemberships = 24928,
    TripAlarmType_ShelvingState_TimedShelve2 = 24930,
    TripAlarmType_ShelvingState_TimedShelve2_InputArguments = 24931,
    TripAlarmType_ShelvingState_Unshelve2 = 24932,
    TripAlarmType_ShelvingState_Unshelve2_InputArguments = 24933,
    TripAlarmType_ShelvingState_OneShotShelve2 = 24934,
    TripAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24935,
    TripAlarmType_GetGroupMemberships = 24936,
    InstrumentDiagnosticAlarmType_ShelvingState_TimedShelve2 = 24938,
    InstrumentDiagnosticAlarmType_ShelvingState_TimedShelve2_InputArguments = 24939,
    InstrumentDiagnosticAlarmType_ShelvingState_Unshelve2 = 24940,
    InstrumentDiagnosticAlarmType_ShelvingState_Unshelve2_InputArguments = 24941,
    InstrumentDiagnosticAlarmType_ShelvingState_OneShotShelve2 = 24942,
    InstrumentDiagnosticAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24943,
    InstrumentDiagnosticAlarmType_GetGroupMemberships = 24944,
    SystemDiagnosticAlarmType_ShelvingState_TimedShelve2 = 24946,
    SystemDiagnosticAlarmType_ShelvingState_TimedShelve2_InputArguments = 24947,
    SystemDiagnosticAlarmType_ShelvingState_Unshelve2 = 24948,
    SystemDiagnosticAlarmType_ShelvingState_Unshelve2_InputArguments = 24949,
    SystemDiagnosticAlarmType_ShelvingState_OneShotShelve2 = 24950,
    SystemDiagnosticAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24951,
    SystemDiagnosticAlarmType_GetGroupMemberships = 24952,
    CertificateExpirationAlarmType_ShelvingState_TimedShelve2 = 24954,
    CertificateExpirationAlarmType_ShelvingState_TimedShelve2_InputArguments = 24955,
    CertificateExpirationAlarmType_ShelvingState_Unshelve2 = 24956,
    CertificateExpirationAlarmType_ShelvingState_Unshelve2_InputArguments = 24957,
    CertificateExpirationAlarmType_ShelvingState_OneShotShelve2 = 24958,
    CertificateExpirationAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24959,
    CertificateExpirationAlarmType_GetGroupMemberships = 24960,
    DiscrepancyAlarmType_ShelvingState_TimedShelve2 = 24962,
    DiscrepancyAlarmType_ShelvingState_TimedShelve2_InputArguments = 24963,
    DiscrepancyAlarmType_ShelvingState_Unshelve2 = 24964,
    DiscrepancyAlarmType_ShelvingState_Unshelve2_InputArguments = 24965,
    DiscrepancyAlarmType_ShelvingState_OneShotShelve2 = 24966,
    DiscrepancyAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24967,
    DiscrepancyAlarmType_GetGroupMemberships = 24968,
    TrustListOutOfDateAlarmType_ShelvingState_TimedShelve2 = 24970,
    TrustListOutOfDateAlarmType_ShelvingState_TimedShelve2_InputArguments = 24971,
    TrustListOutOfDateAlarmType_ShelvingState_Unshelve2 = 24972,
    TrustListOutOfDateAlarmType_ShelvingState_Unshelve2_InputArguments = 24973,
    TrustListOutOfDateAlarmType_ShelvingState_OneShotShelve2 = 24974,
    TrustListOutOfDateAlarmType_ShelvingState_OneShotShelve2_InputArguments = 24975,
    TrustListOutOfDateAlarmType_GetGroupMemberships = 24976,
    CertificateGroupType_CertificateExpired_ShelvingState_TimedShelve2 = 24978,
    CertificateGroupType_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 24979,
    CertificateGroupType_CertificateExpired_ShelvingState_Unshelve2 = 24980,
    CertificateGroupType_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 24981,
    CertificateGroupType_CertificateExpired_ShelvingState_OneShotShelve2 = 24982,
    CertificateGroupType_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 24983,
    CertificateGroupType_CertificateExpired_GetGroupMemberships = 24984,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_TimedShelve2 = 24986,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 24987,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_Unshelve2 = 24988,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 24989,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 24990,
    CertificateGroupType_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 24991,
    CertificateGroupType_TrustListOutOfDate_GetGroupMemberships = 24992,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve2 = 24994,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 24995,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve2 = 24996,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 24997,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 24998,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 24999,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_GetGroupMemberships = 25000,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25002,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25003,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25004,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25005,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25006,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25007,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_GetGroupMemberships = 25008,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve2 = 25010,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25011,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve2 = 25012,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25013,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 25014,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25015,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_GetGroupMemberships = 25016,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25018,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25019,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25020,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25021,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25022,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25023,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_GetGroupMemberships = 25024,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve2 = 25026,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25027,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve2 = 25028,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25029,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 25030,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25031,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_GetGroupMemberships = 25032,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25034,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25035,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25036,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25037,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25038,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25039,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_GetGroupMemberships = 25040,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_TimedShelve2 = 25042,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25043,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_Unshelve2 = 25044,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25045,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_OneShotShelve2 = 25046,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25047,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_GetGroupMemberships = 25048,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25050,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25051,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_Unshelve2 = 25052,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25053,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25054,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25055,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_GetGroupMemberships = 25056,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve2 = 25058,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25059,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve2 = 25060,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25061,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 25062,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25063,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_GetGroupMemberships = 25064,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25066,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25067,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25068,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25069,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25070,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25071,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_GetGroupMemberships = 25072,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve2 = 25074,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25075,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve2 = 25076,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25077,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 25078,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25079,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_GetGroupMemberships = 25080,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25082,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25083,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25084,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25085,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25086,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25087,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_GetGroupMemberships = 25088,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve2 = 25090,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25091,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve2 = 25092,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25093,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 25094,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25095,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_GetGroupMemberships = 25096,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25098,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25099,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25100,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25101,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25102,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25103,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_GetGroupMemberships = 25104,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve2 = 25106,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25107,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve2 = 25108,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25109,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 25110,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25111,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_GetGroupMemberships = 25112,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25114,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25115,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25116,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25117,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25118,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25119,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_GetGroupMemberships = 25120,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve2 = 25122,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25123,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve2 = 25124,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25125,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 25126,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25127,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_GetGroupMemberships = 25128,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25130,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25131,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25132,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25133,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25134,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25135,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_GetGroupMemberships = 25136,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve2 = 25138,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_TimedShelve2_InputArguments = 25139,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve2 = 25140,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_Unshelve2_InputArguments = 25141,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve2 = 25142,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_ShelvingState_OneShotShelve2_InputArguments = 25143,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_GetGroupMemberships = 25144,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve2 = 25146,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_TimedShelve2_InputArguments = 25147,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve2 = 25148,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_Unshelve2_InputArguments = 25149,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2 = 25150,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_ShelvingState_OneShotShelve2_InputArguments = 25151,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_GetGroupMemberships = 25152,
    AlarmConditionType_GetGroupMemberships_OutputArguments = 25154,
    GetGroupMembershipsMethodType_OutputArguments = 25155,
    AlarmGroupType_AlarmConditionInstance_Placeholder_GetGroupMemberships_OutputArguments = 25156,
    TimedShelve2MethodType = 25157,
    TimedShelve2MethodType_InputArguments = 25158,
    LimitAlarmType_GetGroupMemberships_OutputArguments = 25159,
    ExclusiveLimitAlarmType_GetGroupMemberships_OutputArguments = 25160,
    NonExclusiveLimitAlarmType_GetGroupMemberships_OutputArguments = 25161,
    NonExclusiveLevelAlarmType_GetGroupMemberships_OutputArguments = 25162,
    ExclusiveLevelAlarmType_GetGroupMemberships_OutputArguments = 25163,
    NonExclusiveDeviationAlarmType_GetGroupMemberships_OutputArguments = 25164,
    NonExclusiveRateOfChangeAlarmType_GetGroupMemberships_OutputArguments = 25165,
    ExclusiveDeviationAlarmType_GetGroupMemberships_OutputArguments = 25166,
    ExclusiveRateOfChangeAlarmType_GetGroupMemberships_OutputArguments = 25167,
    DiscreteAlarmType_GetGroupMemberships_OutputArguments = 25168,
    OffNormalAlarmType_GetGroupMemberships_OutputArguments = 25169,
    SystemOffNormalAlarmType_GetGroupMemberships_OutputArguments = 25170,
    TripAlarmType_GetGroupMemberships_OutputArguments = 25171,
    InstrumentDiagnosticAlarmType_GetGroupMemberships_OutputArguments = 25172,
    SystemDiagnosticAlarmType_GetGroupMemberships_OutputArguments = 25173,
    CertificateExpirationAlarmType_GetGroupMemberships_OutputArguments = 25174,
    DiscrepancyAlarmType_GetGroupMemberships_OutputArguments = 25175,
    TrustListOutOfDateAlarmType_GetGroupMemberships_OutputArguments = 25176,
    CertificateGroupType_CertificateExpired_GetGroupMemberships_OutputArguments = 25177,
    CertificateGroupType_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25178,
    CertificateGroupFolderType_DefaultApplicationGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25179,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25180,
    CertificateGroupFolderType_DefaultHttpsGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25181,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25182,
    CertificateGroupFolderType_DefaultUserTokenGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25183,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25184,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_CertificateExpired_GetGroupMemberships_OutputArguments = 25185,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25186,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25187,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25188,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25189,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25190,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25191,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25192,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25193,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25194,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25195,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25196,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_CertificateExpired_GetGroupMemberships_OutputArguments = 25197,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustListOutOfDate_GetGroupMemberships_OutputArguments = 25198,
    OPCUANamespaceMetadata_NamespaceFile_LastModifiedTime = 25199,
    FileType_LastModifiedTime = 25200,
    AddressSpaceFileType_LastModifiedTime = 25201,
    NamespaceMetadataType_NamespaceFile_LastModifiedTime = 25202,
    NamespacesType_NamespaceIdentifier_Placeholder_NamespaceFile_LastModifiedTime = 25203,
    FileDirectoryType_FileName_Placeholder_LastModifiedTime = 25204,
    FileSystem_FileName_Placeholder_LastModifiedTime = 25205,
    TrustListType_LastModifiedTime = 25206,
    CertificateGroupType_TrustList_LastModifiedTime = 25207,
    CertificateGroupFolderType_DefaultApplicationGroup_TrustList_LastModifiedTime = 25208,
    CertificateGroupFolderType_DefaultHttpsGroup_TrustList_LastModifiedTime = 25209,
    CertificateGroupFolderType_DefaultUserTokenGroup_TrustList_LastModifiedTime = 25210,
    CertificateGroupFolderType_AdditionalGroup_Placeholder_TrustList_LastModifiedTime = 25211,
    ServerConfigurationType_CertificateGroups_DefaultApplicationGroup_TrustList_LastModifiedTime = 25212,
    ServerConfigurationType_CertificateGroups_DefaultHttpsGroup_TrustList_LastModifiedTime = 25213,
    ServerConfigurationType_CertificateGroups_DefaultUserTokenGroup_TrustList_LastModifiedTime = 25214,
    ServerConfiguration_CertificateGroups_DefaultApplicationGroup_TrustList_LastModifiedTime = 25215,
    ServerConfiguration_CertificateGroups_DefaultHttpsGroup_TrustList_LastModifiedTime = 25216,
    ServerConfiguration_CertificateGroups_DefaultUserTokenGroup_TrustList_LastModifiedTime = 25217,
    IVlanIdType = 25218,
    IVlanIdType_VlanId = 25219,
    PriorityMappingEntryType = 25220,
    IetfBaseNetworkInterfaceType = 25221,
    IetfBaseNetworkInterfaceType_AdminStatus = 25222,
    IetfBaseNetworkInterfaceType_OperStatus = 25223,
    IetfBaseNetworkInterfaceType_PhysAddress = 25224,
    IetfBaseNetworkInterfaceType_Speed = 25225,
    IetfBaseNetworkInterfaceType_InterfaceName_Placeholder = 25226,
    PriorityMappingTableType = 25227,
    PriorityMappingTableType_PriorityMapppingEntries = 25228,
    PriorityMappingTableType_AddPriorityMappingEntry = 25229,
    PriorityMappingTableType_AddPriorityMappingEntry_InputArguments = 25230,
    PriorityMappingTableType_DeletePriorityMappingEntry = 25231,
    PriorityMappingTableType_DeletePriorityMappingEntry_InputArguments = 25232,
    AddPriorityMappingEntryMethodType = 25233,
    AddPriorityMappingEntryMethodType_InputArguments = 25234,
    DeletePriorityMappingEntryMethodType = 25235,
    DeletePriorityMappingEntryMethodType_InputArguments = 25236,
    UsesPriorityMappingTable = 25237,
    HasLowerLayerInterface = 25238,
    PriorityMappingEntryType_Encoding_DefaultBinary = 25239,
    OpcUa_BinarySchema_PriorityMappingEntryType = 25240,
    OpcUa_BinarySchema_PriorityMappingEntryType_DataTypeVersion = 25241,
    OpcUa_BinarySchema_PriorityMappingEntryType_DictionaryFragment = 25242,
    PriorityMappingEntryType_Encoding_DefaultXml = 25243,
    OpcUa_XmlSchema_PriorityMappingEntryType = 25244,
    OpcUa_XmlSchema_PriorityMappingEntryType_DataTypeVersion = 25245,
    OpcUa_XmlSchema_PriorityMappingEntryType_DictionaryFragment = 25246,
    PriorityMappingEntryType_Encoding_DefaultJson = 25247,
    IetfBaseNetworkInterfaceType_Speed_Definition = 25248,
    IetfBaseNetworkInterfaceType_Speed_ValuePrecision = 25249,
    IetfBaseNetworkInterfaceType_Speed_InstrumentRange = 25250,
    IetfBaseNetworkInterfaceType_Speed_EURange = 25251,
    IetfBaseNetworkInterfaceType_Speed_EngineeringUnits = 25252,
    IsExecutableOn = 25253,
    Controls = 25254,
    Utilizes = 25255,
    Requires = 25256,
    IsPhysicallyConnectedTo = 25257,
    RepresentsSameEntityAs = 25258,
    RepresentsSameHardwareAs = 25259,
    RepresentsSameFunctionalityAs = 25260,
    IsHostedBy = 25261,
    HasPhysicalComponent = 25262,
    HasContainedComponent = 25263,
    HasAttachedComponent = 25264,
    IsExecutingOn = 25265,
    OPCUANamespaceMetadata_ConfigurationVersion = 25266,
    NamespaceMetadataType_ConfigurationVersion = 25267,
    NamespacesType_NamespaceIdentifier_Placeholder_ConfigurationVersion = 25268,
    PublishedDataSetCustomSourceDataType = 25269,
    PubSubKeyPushTargetDataType = 25270,
    PubSubKeyServiceType_SecurityGroups_AddSecurityGroupFolder = 25271,
    PubSubKeyServiceType_SecurityGroups_AddSecurityGroupFolder_InputArguments = 25272,
    PubSubKeyServiceType_SecurityGroups_AddSecurityGroupFolder_OutputArguments = 25273,
    PubSubKeyServiceType_SecurityGroups_RemoveSecurityGroupFolder = 25274,
    PubSubKeyServiceType_SecurityGroups_RemoveSecurityGroupFolder_InputArguments = 25275,
    PubSubKeyServiceType_SecurityGroups_SupportedSecurityPolicyUris = 25276,
    PubSubKeyServiceType_KeyPushTargets = 25277,
    PubSubKeyServiceType_KeyPushTargets_AddPushTarget = 25278,
    PubSubKeyServiceType_KeyPushTargets_AddPushTarget_InputArguments = 25279,
    PubSubKeyServiceType_KeyPushTargets_AddPushTarget_OutputArguments = 25280,
    PubSubKeyServiceType_KeyPushTargets_RemovePushTarget = 25281,
    PubSubKeyServiceType_KeyPushTargets_RemovePushTarget_InputArguments = 25282,
    PubSubKeyServiceType_KeyPushTargets_AddPushTargetFolder = 25283,
    PubSubKeyServiceType_KeyPushTargets_AddPushTargetFolder_InputArguments = 25284,
    PubSubKeyServiceType_KeyPushTargets_AddPushTargetFolder_OutputArguments = 25285,
    PubSubKeyServiceType_KeyPushTargets_RemovePushTargetFolder = 25286,
    PubSubKeyServiceType_KeyPushTargets_RemovePushTargetFolder_InputArguments = 25287,
    AddSecurityGroupFolderMethodType = 25288,
    AddSecurityGroupFolderMethodType_InputArguments = 25289,
    AddSecurityGroupFolderMethodType_OutputArguments = 25290,
    RemoveSecurityGroupFolderMethodType = 25291,
    RemoveSecurityGroupFolderMethodType_InputArguments = 25292,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_AddSecurityGroupFolder = 25293,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_AddSecurityGroupFolder_InputArguments = 25294,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_AddSecurityGroupFolder_OutputArguments = 25295,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_RemoveSecurityGroupFolder = 25296,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_RemoveSecurityGroupFolder_InputArguments = 25297,
    SecurityGroupFolderType_SecurityGroupFolderName_Placeholder_SupportedSecurityPolicyUris = 25298,
    SecurityGroupFolderType_AddSecurityGroupFolder = 25312,
    SecurityGroupFolderType_AddSecurityGroupFolder_InputArguments = 25313,
    SecurityGroupFolderType_AddSecurityGroupFolder_OutputArguments = 25314,
    SecurityGroupFolderType_RemoveSecurityGroupFolder = 25315,
    SecurityGroupFolderType_RemoveSecurityGroupFolder_InputArguments = 25316,
    SecurityGroupFolderType_SupportedSecurityPolicyUris = 25317,
    ConnectSecurityGroupsMethodType = 25331,
    ConnectSecurityGroupsMethodType_InputArguments = 25332,
    ConnectSecurityGroupsMethodType_OutputArguments = 25333,
    DisconnectSecurityGroupsMethodType = 25334,
    DisconnectSecurityGroupsMethodType_InputArguments = 25335,
    DisconnectSecurityGroupsMethodType_OutputArguments = 25336,
    PubSubKeyPushTargetType = 25337,
    PubSubKeyPushTargetType_SecurityPolicyUri = 25340,
    HasPushedSecurityGroup = 25345,
    PubSubKeyPushTargetFolderType = 25346,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder = 25347,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_AddPushTarget = 25348,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_AddPushTarget_InputArguments = 25349,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_AddPushTarget_OutputArguments = 25350,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_RemovePushTarget = 25351,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_RemovePushTarget_InputArguments = 25352,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_AddPushTargetFolder = 25353,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_AddPushTargetFolder_InputArguments = 25354,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_AddPushTargetFolder_OutputArguments = 25355,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_RemovePushTargetFolder = 25356,
    PubSubKeyPushTargetFolderType_PushTargetFolderName_Placeholder_RemovePushTargetFolder_InputArguments = 25357,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder = 25358,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_SecurityPolicyUri = 25361,
    PubSubKeyPushTargetFolderType_AddPushTarget = 25366,
    PubSubKeyPushTargetFolderType_AddPushTarget_InputArguments = 25367,
    PubSubKeyPushTargetFolderType_AddPushTarget_OutputArguments = 25368,
    PubSubKeyPushTargetFolderType_RemovePushTarget = 25369,
    PubSubKeyPushTargetFolderType_RemovePushTarget_InputArguments = 25370,
    PubSubKeyPushTargetFolderType_AddPushTargetFolder = 25371,
    PubSubKeyPushTargetFolderType_AddPushTargetFolder_InputArguments = 25372,
    PubSubKeyPushTargetFolderType_AddPushTargetFolder_OutputArguments = 25373,
    PubSubKeyPushTargetFolderType_RemovePushTargetFolder = 25374,
    PubSubKeyPushTargetFolderType_RemovePushTargetFolder_InputArguments = 25375,
    AddPushTargetMethodType = 25376,
    AddPushTargetMethodType_InputArguments = 25377,
    AddPushTargetMethodType_OutputArguments = 25378,
    RemovePushTargetMethodType = 25379,
    RemovePushTargetMethodType_InputArguments = 25380,
    AddPushTargetFolderMethodType = 25381,
    AddPushTargetFolderMethodType_InputArguments = 25382,
    AddPushTargetFolderMethodType_OutputArguments = 25383,
    RemovePushTargetFolderMethodType = 25384,
    RemovePushTargetFolderMethodType_InputArguments = 25385,
    PublishSubscribeType_SecurityGroups_AddSecurityGroupFolder = 25386,
    PublishSubscribeType_SecurityGroups_AddSecurityGroupFolder_InputArguments = 25387,
    PublishSubscribeType_SecurityGroups_AddSecurityGroupFolder_OutputArguments = 25388,
    PublishSubscribeType_SecurityGroups_RemoveSecurityGroupFolder = 25389,
    PublishSubscribeType_SecurityGroups_RemoveSecurityGroupFolder_InputArguments = 25390,
    PublishSubscribeType_SecurityGroups_SupportedSecurityPolicyUris = 25391,
    PublishSubscribeType_KeyPushTargets = 25392,
    PublishSubscribeType_KeyPushTargets_AddPushTarget = 25393,
    PublishSubscribeType_KeyPushTargets_AddPushTarget_InputArguments = 25394,
    PublishSubscribeType_KeyPushTargets_AddPushTarget_OutputArguments = 25395,
    PublishSubscribeType_KeyPushTargets_RemovePushTarget = 25396,
    PublishSubscribeType_KeyPushTargets_RemovePushTarget_InputArguments = 25397,
    PublishSubscribeType_KeyPushTargets_AddPushTargetFolder = 25398,
    PublishSubscribeType_KeyPushTargets_AddPushTargetFolder_InputArguments = 25399,
    PublishSubscribeType_KeyPushTargets_AddPushTargetFolder_OutputArguments = 25400,
    PublishSubscribeType_KeyPushTargets_RemovePushTargetFolder = 25401,
    PublishSubscribeType_KeyPushTargets_RemovePushTargetFolder_InputArguments = 25402,
    PublishSubscribeType_PubSubConfiguration = 25403,
    PublishSubscribeType_PubSubConfiguration_Size = 25404,
    PublishSubscribeType_PubSubConfiguration_Writable = 25405,
    PublishSubscribeType_PubSubConfiguration_UserWritable = 25406,
    PublishSubscribeType_PubSubConfiguration_OpenCount = 25407,
    PublishSubscribeType_PubSubConfiguration_MimeType = 25408,
    PublishSubscribeType_PubSubConfiguration_MaxByteStringLength = 25409,
    PublishSubscribeType_PubSubConfiguration_LastModifiedTime = 25410,
    PublishSubscribeType_PubSubConfiguration_Open = 25411,
    PublishSubscribeType_PubSubConfiguration_Open_InputArguments = 25412,
    PublishSubscribeType_PubSubConfiguration_Open_OutputArguments = 25413,
    PublishSubscribeType_PubSubConfiguration_Close = 25414,
    PublishSubscribeType_PubSubConfiguration_Close_InputArguments = 25415,
    PublishSubscribeType_PubSubConfiguration_Read = 25416,
    PublishSubscribeType_PubSubConfiguration_Read_InputArguments = 25417,
    PublishSubscribeType_PubSubConfiguration_Read_OutputArguments = 25418,
    PublishSubscribeType_PubSubConfiguration_Write = 25419,
    PublishSubscribeType_PubSubConfiguration_Write_InputArguments = 25420,
    PublishSubscribeType_PubSubConfiguration_GetPosition = 25421,
    PublishSubscribeType_PubSubConfiguration_GetPosition_InputArguments = 25422,
    PublishSubscribeType_PubSubConfiguration_GetPosition_OutputArguments = 25423,
    PublishSubscribeType_PubSubConfiguration_SetPosition = 25424,
    PublishSubscribeType_PubSubConfiguration_SetPosition_InputArguments = 25425,
    PublishSubscribeType_PubSubConfiguration_ReserveIds = 25426,
    PublishSubscribeType_PubSubConfiguration_ReserveIds_InputArguments = 25427,
    PublishSubscribeType_PubSubConfiguration_ReserveIds_OutputArguments = 25428,
    PublishSubscribeType_PubSubConfiguration_CloseAndUpdate = 25429,
    PublishSubscribeType_PubSubConfiguration_CloseAndUpdate_InputArguments = 25430,
    PublishSubscribeType_PubSubConfiguration_CloseAndUpdate_OutputArguments = 25431,
    PublishSubscribeType_DefaultDatagramPublisherId = 25432,
    PublishSubscribeType_ConfigurationVersion = 25433,
    PublishSubscribe_SecurityGroups_AddSecurityGroupFolder = 25434,
    PublishSubscribe_SecurityGroups_AddSecurityGroupFolder_InputArguments = 25435,
    PublishSubscribe_SecurityGroups_AddSecurityGroupFolder_OutputArguments = 25436,
    PublishSubscribe_SecurityGroups_RemoveSecurityGroupFolder = 25437,
    PublishSubscribe_SecurityGroups_RemoveSecurityGroupFolder_InputArguments = 25438,
    PublishSubscribe_SecurityGroups_SupportedSecurityPolicyUris = 25439,
    PublishSubscribe_KeyPushTargets = 25440,
    PublishSubscribe_KeyPushTargets_AddPushTarget = 25441,
    PublishSubscribe_KeyPushTargets_AddPushTarget_InputArguments = 25442,
    PublishSubscribe_KeyPushTargets_AddPushTarget_OutputArguments = 25443,
    PublishSubscribe_KeyPushTargets_RemovePushTarget = 25444,
    PublishSubscribe_KeyPushTargets_RemovePushTarget_InputArguments = 25445,
    PublishSubscribe_KeyPushTargets_AddPushTargetFolder = 25446,
    PublishSubscribe_KeyPushTargets_AddPushTargetFolder_InputArguments = 25447,
    PublishSubscribe_KeyPushTargets_AddPushTargetFolder_OutputArguments = 25448,
    PublishSubscribe_KeyPushTargets_RemovePushTargetFolder = 25449,
    PublishSubscribe_KeyPushTargets_RemovePushTargetFolder_InputArguments = 25450,
    PublishSubscribe_PubSubConfiguration = 25451,
    PublishSubscribe_PubSubConfiguration_Size = 25452,
    PublishSubscribe_PubSubConfiguration_Writable = 25453,
    PublishSubscribe_PubSubConfiguration_UserWritable = 25454,
    PublishSubscribe_PubSubConfiguration_OpenCount = 25455,
    PublishSubscribe_PubSubConfiguration_MimeType = 25456,
    PublishSubscribe_PubSubConfiguration_MaxByteStringLength = 25457,
    PublishSubscribe_PubSubConfiguration_LastModifiedTime = 25458,
    PublishSubscribe_PubSubConfiguration_Open = 25459,
    PublishSubscribe_PubSubConfiguration_Open_InputArguments = 25460,
    PublishSubscribe_PubSubConfiguration_Open_OutputArguments = 25461,
    PublishSubscribe_PubSubConfiguration_Close = 25462,
    PublishSubscribe_PubSubConfiguration_Close_InputArguments = 25463,
    PublishSubscribe_PubSubConfiguration_Read = 25464,
    PublishSubscribe_PubSubConfiguration_Read_InputArguments = 25465,
    PublishSubscribe_PubSubConfiguration_Read_OutputArguments = 25466,
    PublishSubscribe_PubSubConfiguration_Write = 25467,
    PublishSubscribe_PubSubConfiguration_Write_InputArguments = 25468,
    PublishSubscribe_PubSubConfiguration_GetPosition = 25469,
    PublishSubscribe_PubSubConfiguration_GetPosition_InputArguments = 25470,
    PublishSubscribe_PubSubConfiguration_GetPosition_OutputArguments = 25471,
    PublishSubscribe_PubSubConfiguration_SetPosition = 25472,
    PublishSubscribe_PubSubConfiguration_SetPosition_InputArguments = 25473,
    PublishSubscribe_PubSubConfiguration_ReserveIds = 25474,
    PublishSubscribe_PubSubConfiguration_ReserveIds_InputArguments = 25475,
    PublishSubscribe_PubSubConfiguration_ReserveIds_OutputArguments = 25476,
    PublishSubscribe_PubSubConfiguration_CloseAndUpdate = 25477,
    PublishSubscribe_PubSubConfiguration_CloseAndUpdate_InputArguments = 25478,
    PublishSubscribe_PubSubConfiguration_CloseAndUpdate_OutputArguments = 25479,
    PublishSubscribe_DefaultDatagramPublisherId = 25480,
    PublishSubscribe_ConfigurationVersion = 25481,
    PubSubConfigurationType = 25482,
    PubSubConfigurationType_Size = 25483,
    PubSubConfigurationType_Writable = 25484,
    PubSubConfigurationType_UserWritable = 25485,
    PubSubConfigurationType_OpenCount = 25486,
    PubSubConfigurationType_MimeType = 25487,
    PubSubConfigurationType_MaxByteStringLength = 25488,
    PubSubConfigurationType_LastModifiedTime = 25489,
    PubSubConfigurationType_Open = 25490,
    PubSubConfigurationType_Open_InputArguments = 25491,
    PubSubConfigurationType_Open_OutputArguments = 25492,
    PubSubConfigurationType_Close = 25493,
    PubSubConfigurationType_Close_InputArguments = 25494,
    PubSubConfigurationType_Read = 25495,
    PubSubConfigurationType_Read_InputArguments = 25496,
    PubSubConfigurationType_Read_OutputArguments = 25497,
    PubSubConfigurationType_Write = 25498,
    PubSubConfigurationType_Write_InputArguments = 25499,
    PubSubConfigurationType_GetPosition = 25500,
    PubSubConfigurationType_GetPosition_InputArguments = 25501,
    PubSubConfigurationType_GetPosition_OutputArguments = 25502,
    PubSubConfigurationType_SetPosition = 25503,
    PubSubConfigurationType_SetPosition_InputArguments = 25504,
    PubSubConfigurationType_ReserveIds = 25505,
    PubSubConfigurationType_ReserveIds_InputArguments = 25506,
    PubSubConfigurationType_ReserveIds_OutputArguments = 25507,
    PubSubConfigurationType_CloseAndUpdate = 25508,
    PubSubConfigurationType_CloseAndUpdate_InputArguments = 25509,
    PubSubConfigurationType_CloseAndUpdate_OutputArguments = 25510,
    PubSubConfigurationTypeReserveIdsMethodType = 25511,
    PubSubConfigurationTypeReserveIdsMethodType_InputArguments = 25512,
    PubSubConfigurationTypeReserveIdsMethodType_OutputArguments = 25513,
    PubSubConfigurationTypeCloseAndUpdateMethodType = 25514,
    PubSubConfigurationTypeCloseAndUpdateMethodType_InputArguments = 25515,
    PubSubConfigurationTypeCloseAndUpdateMethodType_OutputArguments = 25516,
    PubSubConfigurationRefMask = 25517,
    PubSubConfigurationRefMask_OptionSetValues = 25518,
    PubSubConfigurationRefDataType = 25519,
    PubSubConfigurationValueDataType = 25520,
    PublishedDataSetType_CyclicDataSet = 25521,
    PublishedDataItemsType_CyclicDataSet = 25522,
    PublishedEventsType_CyclicDataSet = 25523,
    DataSetFolderType_PublishedDataSetName_Placeholder_CyclicDataSet = 25524,
    DatagramConnectionTransportType_QosCategory = 25525,
    DatagramConnectionTransportType_DatagramQos = 25526,
    DatagramWriterGroupTransportType_QosCategory = 25527,
    DatagramDataSetReaderTransportType_QosCategory = 25528,
    PublishedDataSetCustomSourceDataType_Encoding_DefaultBinary = 25529,
    PubSubKeyPushTargetDataType_Encoding_DefaultBinary = 25530,
    PubSubConfigurationRefDataType_Encoding_DefaultBinary = 25531,
    PubSubConfigurationValueDataType_Encoding_DefaultBinary = 25532,
    OpcUa_BinarySchema_PublishedDataSetCustomSourceDataType = 25533,
    OpcUa_BinarySchema_PublishedDataSetCustomSourceDataType_DataTypeVersion = 25534,
    OpcUa_BinarySchema_PublishedDataSetCustomSourceDataType_DictionaryFragment = 25535,
    OpcUa_BinarySchema_PubSubKeyPushTargetDataType = 25536,
    OpcUa_BinarySchema_PubSubKeyPushTargetDataType_DataTypeVersion = 25537,
    OpcUa_BinarySchema_PubSubKeyPushTargetDataType_DictionaryFragment = 25538,
    OpcUa_BinarySchema_PubSubConfigurationRefDataType = 25539,
    OpcUa_BinarySchema_PubSubConfigurationRefDataType_DataTypeVersion = 25540,
    OpcUa_BinarySchema_PubSubConfigurationRefDataType_DictionaryFragment = 25541,
    OpcUa_BinarySchema_PubSubConfigurationValueDataType = 25542,
    OpcUa_BinarySchema_PubSubConfigurationValueDataType_DataTypeVersion = 25543,
    OpcUa_BinarySchema_PubSubConfigurationValueDataType_DictionaryFragment = 25544,
    PublishedDataSetCustomSourceDataType_Encoding_DefaultXml = 25545,
    PubSubKeyPushTargetDataType_Encoding_DefaultXml = 25546,
    PubSubConfigurationRefDataType_Encoding_DefaultXml = 25547,
    PubSubConfigurationValueDataType_Encoding_DefaultXml = 25548,
    OpcUa_XmlSchema_PublishedDataSetCustomSourceDataType = 25549,
    OpcUa_XmlSchema_PublishedDataSetCustomSourceDataType_DataTypeVersion = 25550,
    OpcUa_XmlSchema_PublishedDataSetCustomSourceDataType_DictionaryFragment = 25551,
    OpcUa_XmlSchema_PubSubKeyPushTargetDataType = 25552,
    OpcUa_XmlSchema_PubSubKeyPushTargetDataType_DataTypeVersion = 25553,
    OpcUa_XmlSchema_PubSubKeyPushTargetDataType_DictionaryFragment = 25554,
    OpcUa_XmlSchema_PubSubConfigurationRefDataType = 25555,
    OpcUa_XmlSchema_PubSubConfigurationRefDataType_DataTypeVersion = 25556,
    OpcUa_XmlSchema_PubSubConfigurationRefDataType_DictionaryFragment = 25557,
    OpcUa_XmlSchema_PubSubConfigurationValueDataType = 25558,
    OpcUa_XmlSchema_PubSubConfigurationValueDataType_DataTypeVersion = 25559,
    OpcUa_XmlSchema_PubSubConfigurationValueDataType_DictionaryFragment = 25560,
    PublishedDataSetCustomSourceDataType_Encoding_DefaultJson = 25561,
    PubSubKeyPushTargetDataType_Encoding_DefaultJson = 25562,
    PubSubConfigurationRefDataType_Encoding_DefaultJson = 25563,
    PubSubConfigurationValueDataType_Encoding_DefaultJson = 25564,
    WellKnownRole_SecurityKeyServerAdmin = 25565,
    WellKnownRole_SecurityKeyServerAdmin_Identities = 25566,
    WellKnownRole_SecurityKeyServerAdmin_ApplicationsExclude = 25567,
    WellKnownRole_SecurityKeyServerAdmin_Applications = 25568,
    WellKnownRole_SecurityKeyServerAdmin_EndpointsExclude = 25569,
    WellKnownRole_SecurityKeyServerAdmin_Endpoints = 25570,
    WellKnownRole_SecurityKeyServerAdmin_CustomConfiguration = 25571,
    WellKnownRole_SecurityKeyServerAdmin_AddIdentity = 25572,
    WellKnownRole_SecurityKeyServerAdmin_AddIdentity_InputArguments = 25573,
    WellKnownRole_SecurityKeyServerAdmin_RemoveIdentity = 25574,
    WellKnownRole_SecurityKeyServerAdmin_RemoveIdentity_InputArguments = 25575,
    WellKnownRole_SecurityKeyServerAdmin_AddApplication = 25576,
    WellKnownRole_SecurityKeyServerAdmin_AddApplication_InputArguments = 25577,
    WellKnownRole_SecurityKeyServerAdmin_RemoveApplication = 25578,
    WellKnownRole_SecurityKeyServerAdmin_RemoveApplication_InputArguments = 25579,
    WellKnownRole_SecurityKeyServerAdmin_AddEndpoint = 25580,
    WellKnownRole_SecurityKeyServerAdmin_AddEndpoint_InputArguments = 25581,
    WellKnownRole_SecurityKeyServerAdmin_RemoveEndpoint = 25582,
    WellKnownRole_SecurityKeyServerAdmin_RemoveEndpoint_InputArguments = 25583,
    WellKnownRole_SecurityKeyServer = 25584,
    WellKnownRole_SecurityKeyServer_Identities = 25585,
    WellKnownRole_SecurityKeyServer_ApplicationsExclude = 25586,
    WellKnownRole_SecurityKeyServer_Applications = 25587,
    WellKnownRole_SecurityKeyServer_EndpointsExclude = 25588,
    WellKnownRole_SecurityKeyServer_Endpoints = 25589,
    WellKnownRole_SecurityKeyServer_CustomConfiguration = 25590,
    WellKnownRole_SecurityKeyServer_AddIdentity = 25591,
    WellKnownRole_SecurityKeyServer_AddIdentity_InputArguments = 25592,
    WellKnownRole_SecurityKeyServer_RemoveIdentity = 25593,
    WellKnownRole_SecurityKeyServer_RemoveIdentity_InputArguments = 25594,
    WellKnownRole_SecurityKeyServer_AddApplication = 25595,
    WellKnownRole_SecurityKeyServer_AddApplication_InputArguments = 25596,
    WellKnownRole_SecurityKeyServer_RemoveApplication = 25597,
    WellKnownRole_SecurityKeyServer_RemoveApplication_InputArguments = 25598,
    WellKnownRole_SecurityKeyServer_AddEndpoint = 25599,
    WellKnownRole_SecurityKeyServer_AddEndpoint_InputArguments = 25600,
    WellKnownRole_SecurityKeyServer_RemoveEndpoint = 25601,
    WellKnownRole_SecurityKeyServer_RemoveEndpoint_InputArguments = 25602,
    WellKnownRole_SecurityKeyAccess = 25603,
    WellKnownRole_SecurityKeyAccess_Identities = 25604,
    WellKnownRole_SecurityKeyAccess_ApplicationsExclude = 25605,
    WellKnownRole_SecurityKeyAccess_Applications = 25606,
    WellKnownRole_SecurityKeyAccess_EndpointsExclude = 25607,
    WellKnownRole_SecurityKeyAccess_Endpoints = 25608,
    WellKnownRole_SecurityKeyAccess_CustomConfiguration = 25609,
    WellKnownRole_SecurityKeyAccess_AddIdentity = 25610,
    WellKnownRole_SecurityKeyAccess_AddIdentity_InputArguments = 25611,
    WellKnownRole_SecurityKeyAccess_RemoveIdentity = 25612,
    WellKnownRole_SecurityKeyAccess_RemoveIdentity_InputArguments = 25613,
    WellKnownRole_SecurityKeyAccess_AddApplication = 25614,
    WellKnownRole_SecurityKeyAccess_AddApplication_InputArguments = 25615,
    WellKnownRole_SecurityKeyAccess_RemoveApplication = 25616,
    WellKnownRole_SecurityKeyAccess_RemoveApplication_InputArguments = 25617,
    WellKnownRole_SecurityKeyAccess_AddEndpoint = 25618,
    WellKnownRole_SecurityKeyAccess_AddEndpoint_InputArguments = 25619,
    WellKnownRole_SecurityKeyAccess_RemoveEndpoint = 25620,
    WellKnownRole_SecurityKeyAccess_RemoveEndpoint_InputArguments = 25621,
    SecurityGroupFolderType_SecurityGroupName_Placeholder_InvalidateKeys = 25622,
    SecurityGroupFolderType_SecurityGroupName_Placeholder_ForceKeyRotation = 25623,
    SecurityGroupType_InvalidateKeys = 25624,
    SecurityGroupType_ForceKeyRotation = 25625,
    PubSubKeyPushTargetType_SecurityGroupName_Placeholder = 25626,
    PubSubKeyPushTargetType_SecurityGroupName_Placeholder_SecurityGroupId = 25627,
    PubSubKeyPushTargetType_SecurityGroupName_Placeholder_KeyLifetime = 25628,
    PubSubKeyPushTargetType_SecurityGroupName_Placeholder_SecurityPolicyUri = 25629,
    PubSubKeyPushTargetType_SecurityGroupName_Placeholder_MaxFutureKeyCount = 25630,
    PubSubKeyPushTargetType_SecurityGroupName_Placeholder_MaxPastKeyCount = 25631,
    PubSubKeyPushTargetType_SecurityGroupName_Placeholder_InvalidateKeys = 25632,
    PubSubKeyPushTargetType_SecurityGroupName_Placeholder_ForceKeyRotation = 25633,
    PubSubKeyPushTargetType_ApplicationUri = 25634,
    PubSubKeyPushTargetType_EndpointUrl = 25635,
    PubSubKeyPushTargetType_UserTokenType = 25636,
    PubSubKeyPushTargetType_RequestedKeyCount = 25637,
    PubSubKeyPushTargetType_RetryInterval = 25638,
    PubSubKeyPushTargetType_LastPushExecutionTime = 25639,
    PubSubKeyPushTargetType_LastPushErrorTime = 25640,
    PubSubKeyPushTargetType_ConnectSecurityGroups = 25641,
    PubSubKeyPushTargetType_ConnectSecurityGroups_InputArguments = 25642,
    PubSubKeyPushTargetType_ConnectSecurityGroups_OutputArguments = 25643,
    PubSubKeyPushTargetType_DisconnectSecurityGroups = 25644,
    PubSubKeyPushTargetType_DisconnectSecurityGroups_InputArguments = 25645,
    PubSubKeyPushTargetType_DisconnectSecurityGroups_OutputArguments = 25646,
    PubSubKeyPushTargetType_TriggerKeyUpdate = 25647,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_ApplicationUri = 25648,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_EndpointUrl = 25649,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_UserTokenType = 25650,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_RequestedKeyCount = 25651,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_RetryInterval = 25652,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_LastPushExecutionTime = 25653,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_LastPushErrorTime = 25654,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_ConnectSecurityGroups = 25655,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_ConnectSecurityGroups_InputArguments = 25656,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_ConnectSecurityGroups_OutputArguments = 25657,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_DisconnectSecurityGroups = 25658,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_DisconnectSecurityGroups_InputArguments = 25659,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_DisconnectSecurityGroups_OutputArguments = 25660,
    PubSubKeyPushTargetFolderType_PushTargetName_Placeholder_TriggerKeyUpdate = 25661,
    AuditClientUpdateMethodResultEventType_OutputArguments = 25684,
    ApplicationConfigurationType = 25731,
    ProvisionableDeviceType = 26871,
    AlarmSuppressionGroupType = 32064,
    TrustListUpdateRequestedAuditEventType = 32260,
    TransactionErrorType = 32285,
    TransactionDiagnosticsType = 32286,
    CertificateUpdateRequestedAuditEventType = 32306,
}
