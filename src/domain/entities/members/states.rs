//! 주소의 주(state) 열거형

coded_enum! {
    /// 미국 50개 주와 컬럼비아 특별구
    pub enum States {
        Unspecified = 0 => "--",
        Alabama = 1 => "AL",
        Alaska = 2 => "AK",
        Arizona = 3 => "AZ",
        Arkansas = 4 => "AR",
        California = 5 => "CA",
        Colorado = 6 => "CO",
        Connecticut = 7 => "CT",
        Delaware = 8 => "DE",
        Florida = 9 => "FL",
        Georgia = 10 => "GA",
        Hawaii = 11 => "HI",
        Idaho = 12 => "ID",
        Illinois = 13 => "IL",
        Indiana = 14 => "IN",
        Iowa = 15 => "IA",
        Kansas = 16 => "KS",
        Kentucky = 17 => "KY",
        Louisiana = 18 => "LA",
        Maine = 19 => "ME",
        Maryland = 20 => "MD",
        Massachusetts = 21 => "MA",
        Michigan = 22 => "MI",
        Minnesota = 23 => "MN",
        Mississippi = 24 => "MS",
        Missouri = 25 => "MO",
        Montana = 26 => "MT",
        Nebraska = 27 => "NE",
        Nevada = 28 => "NV",
        NewHampshire = 29 => "NH",
        NewJersey = 30 => "NJ",
        NewMexico = 31 => "NM",
        NewYork = 32 => "NY",
        NorthCarolina = 33 => "NC",
        NorthDakota = 34 => "ND",
        Ohio = 35 => "OH",
        Oklahoma = 36 => "OK",
        Oregon = 37 => "OR",
        Pennsylvania = 38 => "PA",
        RhodeIsland = 39 => "RI",
        SouthCarolina = 40 => "SC",
        SouthDakota = 41 => "SD",
        Tennessee = 42 => "TN",
        Texas = 43 => "TX",
        Utah = 44 => "UT",
        Vermont = 45 => "VT",
        Virginia = 46 => "VA",
        Washington = 47 => "WA",
        WestVirginia = 48 => "WV",
        Wisconsin = 49 => "WI",
        Wyoming = 50 => "WY",
        DistrictOfColumbia = 51 => "DC",
    }
}

impl Default for States {
    fn default() -> Self {
        States::Unspecified
    }
}
