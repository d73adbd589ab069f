ssn_table! {
    /// Outcome class of a status value
    pub enum Severity: u8 {
        Success = 0 => ("success", "Success"),
        Failure = 1 => ("failure", "Failure"),
    }
}

ssn_table! {
    /// Whether a code is private to its module or shared by all modules
    pub enum ErrorType: u8 {
        Private = 0 => ("private", "Private error"),
        General = 1 => ("general", "General error"),
    }
}

ssn_table! {
    /// Subsystem that produced a status value
    pub enum Module: u16 {
        Unknown = 0 => ("unknown", "Unknown"),
        General = 1 => ("general", "General"),
        PpEngine = 2 => ("ppengine", "Post processing engine"),
        SbfStream = 3 => ("sbfstream", "SBF stream"),
        RnxDec = 4 => ("rnxdec", "RINEX decoder"),
        License = 5 => ("license", "License mechanism"),
        SsnHandle = 6 => ("ssnhandle", "SSN handle"),
        SsnLicense = 7 => ("ssnlicense", "SSN license mechanism"),
        SsnError = 8 => ("ssnerror", "SSN error"),
        SsnSnmp = 9 => ("ssnsnmp", "SSN SNMP handle"),
        SbfAnalyze = 10 => ("sbfanalyze", "SBF analyze"),
        SsnSdk = 11 => ("ssnsdk", "SSN SDK"),
        PpeCompute = 12 => ("ppecompute", "PPE compute"),
        BaseFinder = 13 => ("basefinder", "BaseFinder"),
    }
}

ssn_table! {
    /// Finer grained subsystem that produced a status value
    pub enum Submodule: u8 {
        Unknown = 0 => ("unknown", "Unknown"),
        General = 1 => ("general", "General"),
        SbfStream = 2 => ("sbfstream", "SBF stream"),
        RnxDec = 3 => ("rnxdec", "RINEX decoder"),
        PpEngine = 4 => ("ppengine", "Post processing engine"),
        Rnx210 = 5 => ("rnx210", "RINEX 2.10 decoder"),
        Rnx300 = 6 => ("rnx300", "RINEX 3.00 decoder"),
        License = 7 => ("license", "License mechanism"),
        SsnHandle = 8 => ("ssnhandle", "SSN handle"),
        SsnLicensePpsdk = 9 => ("ssnlicenseppsdk", "SSN license PP-SDK"),
        SsnLicenseDummy = 10 => ("ssnlicensedummy", "SSN license dummy"),
        SsnError = 11 => ("ssnerror", "SSN error"),
        SsnSnmp = 12 => ("ssnsnmp", "SSN SNMP"),
        SbfAnalyze = 13 => ("sbfanalyze", "SBF analyze"),
        SsnSdk = 14 => ("ssnsdk", "SSN SDK"),
        SsnSdkPpsdk = 15 => ("ssnsdkppsdk", "SSN SDK PP-SDK"),
        PpeCompute = 16 => ("ppecompute", "PPE compute"),
        BaseFinder = 17 => ("basefinder", "BaseFinder"),
    }
}

ssn_table! {
    /// Condition number carried in the low 7 bits of a status value.
    ///
    /// Values up to and including [`Code::TraceErr`] are reported with the
    /// success severity and denote warnings.
    pub enum Code: u8 {
        Ok = 0 => ("ok", "everything OK"),
        False = 1 => ("false", "false success"),
        AlreadyPresent = 2 => ("alreadypresent", "object already present"),
        EndOfStream = 3 => ("endofstream", "end of stream reached"),
        EndOfFile = 4 => ("endoffile", "end of file reached"),
        InvalidSbfBlockWarning = 5 => ("invalidsbfblockwarning", "invalid SBF block skipped"),
        NoDgps = 6 => ("nodgps", "no DGPS data could be created"),
        TimeOutOfRange = 7 => ("timeoutofrange", "time stamp outside of the SBF range"),
        EndOfList = 8 => ("endoflist", "end of list reached"),
        StreamEmpty = 9 => ("streamempty", "SBF stream is empty"),
        TraceErr = 10 => ("traceerr", "trace errors seen inside the algorithm"),
        Unexpected = 11 => ("unexpected", "unexpected event inside the algorithm"),
        NotImplemented = 12 => ("notimplemented", "functionality not implemented"),
        InvalidArg = 13 => ("invalidarg", "invalid argument"),
        NullPointer = 14 => ("nullpointer", "unexpected null pointer"),
        OutOfRange = 15 => ("outofrange", "parameter out of range"),
        BufTooSmall = 16 => ("buftoosmall", "buffer too small"),
        EmptyString = 17 => ("emptystring", "string argument is empty"),
        OutOfMemory = 18 => ("outofmemory", "allocation failed"),
        Busy = 19 => ("busy", "object busy"),
        NotPresent = 20 => ("notpresent", "object not present"),
        InvalidLicense = 21 => ("invalidlicense", "invalid license"),
        LicenseNotFound = 22 => ("licensenotfound", "license information files not found"),
        LicenseNoDongle = 23 => ("licensenodongle", "no dongle found"),
        InitLicense = 24 => ("initlicense", "could not initialize license object"),
        DemoEnded = 25 => ("demoended", "demo period ended"),
        InvalidHandle = 26 => ("invalidhandle", "invalid handle"),
        InvalidName = 27 => ("invalidname", "invalid file or directory name"),
        ReadOnly = 28 => ("readonly", "object is read only"),
        FileOpen = 29 => ("fileopen", "error opening file"),
        FileClose = 30 => ("fileclose", "error closing file"),
        FileRead = 31 => ("fileread", "error reading file"),
        FileWrite = 32 => ("filewrite", "error writing file"),
        FileSeek = 33 => ("fileseek", "error seeking file"),
        FileRemove = 34 => ("fileremove", "error removing file"),
        FileRo = 35 => ("filero", "file opened read only"),
        WrongState = 36 => ("wrongstate", "object in the wrong state"),
        InvalidRinexFile = 37 => ("invalidrinexfile", "invalid RINEX file"),
        IRnxHeader = 38 => ("irnxheader", "no END OF HEADER line found"),
        IRnxEpochFlag = 39 => ("irnxepochflag", "invalid epoch flag"),
        InvalidSbfFile = 40 => ("invalidsbffile", "invalid SBF file"),
        InvalidAsciiCmd = 41 => ("invalidasciicmd", "invalid ASCII command"),
        InvalidSnmpCmd = 42 => ("invalidsnmpcmd", "invalid SNMP command"),
        InvalidTimestamp = 43 => ("invalidtimestamp", "invalid timestamp"),
        InvalidRate = 44 => ("invalidrate", "invalid rate"),
        InvalidSbfBlock = 45 => ("invalidsbfblock", "invalid SBF block"),
        InvalidSbfId = 46 => ("invalidsbfid", "invalid SBF id"),
        OneInstance = 47 => ("oneinstance", "only one instance allowed"),
        FnNotEnough = 48 => ("fnnotenough", "not enough GLONASS frequency numbers"),
        NoPvt = 49 => ("nopvt", "not enough data to compute a PVT"),
        NoGpsCorr = 50 => ("nogpscorr", "not enough data to compute RTCM3 GPS corrections"),
        NoInfoFilePath = 51 => ("noinfofilepath", "no info files path found"),
        InfoFilePathTooLarge = 52 => ("infofilepathtoolarge", "info files path exceeds 256 characters"),
        NoFlexRate = 53 => ("noflexrate", "SBF id has no flex rate"),
        Asn1 = 54 => ("asn1", "ASN.1 parse error"),
        Snmp = 55 => ("snmp", "general SNMP error"),
        NoPosData = 56 => ("noposdata", "no position data"),
        NoPermsFile = 57 => ("nopermsfile", "no valid permissions file found"),
        BadSerialNr = 58 => ("badserialnr", "permissions not for this hardware"),
        WrongHwPlatform = 59 => ("wronghwplatform", "hardware platform ids do not match"),
        StreamNotEmpty = 60 => ("streamnotempty", "stream is not empty"),
        DirIssue = 61 => ("dirissue", "directory does not exist or has invalid permissions"),
        NeQuick = 62 => ("nequick", "could not initialize NeQuick"),
        BlockNotFound = 63 => ("blocknotfound", "SBF block not found"),
        PpecInitFailed = 64 => ("ppecinitfailed", "PPE compute failed to initialize"),
        PpecPvtFailed = 65 => ("ppecpvtfailed", "PPE compute PVT computation failed"),
        PpecNavMsgFailed = 66 => ("ppecnavmsgfailed", "PPE compute navigation message decoding failed"),
        PpecMeasFailed = 67 => ("ppecmeasfailed", "PPE compute measurement decoding failed"),
        PpecUpdateFailed = 68 => ("ppecupdatefailed", "PPE compute failed to update"),
        PvtFailed = 69 => ("pvtfailed", "PVT computation failed"),
        RtcmEncodingFailed = 70 => ("rtcmencodingfailed", "RTCM encoding failed"),
        AppendBlockFailed = 71 => ("appendblockfailed", "failed to append an SBF block"),
        PpecPvaFailed = 72 => ("ppecpvafailed", "PPE compute PVA computation failed"),
        PpecExtMeasMsgFailed = 73 => ("ppecextmeasmsgfailed", "PPE compute external INS measurement decoding failed"),
        ElcInvalidSettings = 74 => ("elcinvalidsettings", "invalid ELC settings combination"),
        NoPpsdkDongle = 75 => ("noppsdkdongle", "dongle is not a PP-SDK dongle"),
        NoGeotagzDongle = 76 => ("nogeotagzdongle", "dongle is not a GeoTagZ dongle"),
        ConstellationRinex = 77 => ("constellationrinex", "unsupported RINEX constellation"),
        BaseFinderDbMissing = 78 => ("basefinderdbmissing", "BaseFinder database not found"),
        BaseFinderDbFormat = 79 => ("basefinderdbformat", "BaseFinder database format is wrong"),
        BaseFinderNoRinex = 80 => ("basefindernorinex", "BaseFinder found no valid RINEX data"),
        BaseFinderNoPos = 81 => ("basefindernopos", "BaseFinder position not specified"),
        BaseFinderNoTime = 82 => ("basefindernotime", "BaseFinder time interval not specified"),
        BaseFinderNoRadius = 83 => ("basefindernoradius", "BaseFinder radius not specified"),
        UncompressingGz = 84 => ("uncompressinggz", "error uncompressing a GZ file"),
        UncompressingZ = 85 => ("uncompressingz", "error uncompressing a Z file"),
        NoBaseFinderPerm = 86 => ("nobasefinderperm", "no BaseFinder permission"),
    }
}

impl Code {
    /// Codes that are reported alongside a success severity
    pub const fn is_warning_code(self) -> bool {
        (self as u8) <= (Code::TraceErr as u8)
    }
}
