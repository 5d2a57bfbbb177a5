//! Built-in stroke glyphs for printable ASCII
//!
//! One entry per code point from U+0020 to U+007E, in the coordinate
//! encoding described in [`crate::parse`].

/// First code point of the table
pub const FIRST_CODE_POINT: u32 = 0x20;

#[rustfmt::skip]
pub static BUILTIN_GLYPHS: [&str; 95] = [
    r"JZ", // space
    r"MWRGRU RRZQ[R\S[RZ", // !
    r"JZNGNN RVGVN", // quotation mark
    r"H]SCLc RYCRc RLPZP RKVYV", // #
    r"H\PCP` RTCT` RYJWHTGPGMHKJKLLNMOOPURWSXTYVYYW[T\P\M[KY", // $
    r"F^[GI\ RNGPIPKOMMNKNILIJJHLGNGPHSIVIYH[G RWUUVTXTZV\X\Z[[Y[WYUWU", // %
    r"E_\P\O[NZNYOXQVVTYR[P\L\J[IZHXHVITJSQORNSLSJRHPGNHMJMLNOPRUYW[Y\[\\[\Z", // &
    r"MWRIQHRGSHSJRLQM", // apostrophe
    r"KYVCTERHPLOQOUPZR^TaVc", // (
    r"KYNCPERHTLUQUUTZR^PaNc", // )
    r"JZRGRS RMJWP RWJMP", // *
    r"E_RJR\ RIS[S", // +
    r"MWS[R\Q[RZS[S]R_Q`", // ,
    r"E_IS[S", // -
    r"MWRZQ[R\S[RZ", // .
    r"G][CIc", // /
    r"H\QGNHLKKPKSLXN[Q\S\V[XXYSYPXKVHSGQG", // 0
    r"H\NKPJSGS\", // 1
    r"H\LLLKMINHPGTGVHWIXKXMWOURK\Y\", // 2
    r"H\MGXGROUOWPXQYTYVXYV[S\P\M[LZKX", // 3
    r"H\UGKUZU RUGU\", // 4
    r"H\WGMGLPMOPNSNVOXQYTYVXYV[S\P\M[LZKX", // 5
    r"H\XJWHTGRGOHMKLPLUMYO[R\S\V[XYYVYUXRVPSOROOPMRLU", // 6
    r"H\YGO\ RKGYG", // 7
    r"H\PGMHLJLLMNOOSPVQXSYUYXXZW[T\P\M[LZKXKULSNQQPUOWNXLXJWHTGPG", // 8
    r"H\XNWQUSRTQTNSLQKNKMLJNHQGRGUHWJXNXSWXU[R\P\M[LY", // 9
    r"MWRNQORPSORN RRZQ[R\S[RZ", // :
    r"MWRNQORPSORN RS[R\Q[RZS[S]R_Q`", // ;
    r"F^ZJJSZ\", // <
    r"E_IP[P RIV[V", // =
    r"F^JJZSJ\", // >
    r"I[LLLKMINHPGTGVHWIXKXMWOVPRRRU RRZQ[R\S[RZ", // ?
    r"E`WOVMTLQLOMNNMQMTNVPWSWUVVT RQLONNQNTOVPW RWLVTVVXWZW\U]R]P\M[KYIWHTGQGNHLIJKIMHPHSIVJXLZN[Q\T\W[YZZY RXLWTWVXW", // @
    r"I[RGJ\ RRGZ\ RMUWU", // A
    r"H]LGL\ RLGUGXHYIZKZMYOXPUQ RLQUQXRYSZUZXYZX[U\L\", // B
    r"H]ZLYJWHUGQGOHMJLLKOKTLWMYO[Q\U\W[YYZW", // C
    r"H]LGL\ RLGSGVHXJYLZOZTYWXYV[S\L\", // D
    r"I\MGM\ RMGZG RMQUQ RM\Z\", // E
    r"I[MGM\ RMGZG RMQUQ", // F
    r"H]ZLYJWHUGQGOHMJLLKOKTLWMYO[Q\U\W[YYZWZT RUTZT", // G
    r"G]KGK\ RYGY\ RKQYQ", // H
    r"NVRGR\", // I
    r"JZVGVWUZT[R\P\N[MZLWLU", // J
    r"H]LGL\ RZGLU RQPZ\", // K
    r"J[NGN\ RN\Z\", // L
    r"F^JGJ\ RJGR\ RZGR\ RZGZ\", // M
    r"G]KGK\ RKGY\ RYGY\", // N
    r"G]PGNHLJKLJOJTKWLYN[P\T\V[XYYWZTZOYLXJVHTGPG", // O
    r"H]LGL\ RLGUGXHYIZKZNYPXQURLR", // P
    r"G]PGNHLJKLJOJTKWLYN[P\T\V[XYYWZTZOYLXJVHTGPG RSXY^", // Q
    r"H]LGL\ RLGUGXHYIZKZMYOXPUQLQ RSQZ\", // R
    r"H\YJWHTGPGMHKJKLLNMOOPURWSXTYVYYW[T\P\M[KY", // S
    r"JZRGR\ RKGYG", // T
    r"G]KGKVLYN[Q\S\V[XYYVYG", // U
    r"I[JGR\ RZGR\", // V
    r"F^HGM\ RRGM\ RRGW\ R\GW\", // W
    r"H\KGY\ RYGK\", // X
    r"I[JGRQR\ RZGRQ", // Y
    r"H\YGK\ RKGYG RK\Y\", // Z
    r"KYOCOc RPCPc ROCVC ROcVc", // [
    r"KYKGY_", // reverse solidus
    r"KYTCTc RUCUc RNCUC RNcUc", // ]
    r"JZPMRJTM RMPRKWP RRKR\", // ^
    r"JZJ^Z^", // _
    r"MWSGRHQJQLRMSLRK", // grave accent
    r"I\XNX\ RXQVOTNQNOOMQLTLVMYO[Q\T\V[XY", // a
    r"I\MGM\ RMQOOQNTNVOXQYTYVXYV[T\Q\O[MY", // b
    r"I[XQVOTNQNOOMQLTLVMYO[Q\T\V[XY", // c
    r"I\XGX\ RXQVOTNQNOOMQLTLVMYO[Q\T\V[XY", // d
    r"I[LTXTXRWPVOTNQNOOMQLTLVMYO[Q\T\V[XY", // e
    r"LXVGTGRHQKQ\ RNNUN", // f
    r"I\XNX^WaVbTcQcOb RXQVOTNQNOOMQLTLVMYO[Q\T\V[XY", // g
    r"I\MGM\ RMRPORNUNWOXRX\", // h
    r"NVQGRHSGRFQG RRNR\", // i
    r"MWRGSHTGSFRG RSNS_RbPcNc", // j
    r"J[NGN\ RXNNX RRTY\", // k
    r"NVRGR\", // l
    r"CaGNG\ RGRJOLNONQORRR\ RRRUOWNZN\O]R]\", // m
    r"I\MNM\ RMRPORNUNWOXRX\", // n
    r"I\QNOOMQLTLVMYO[Q\T\V[XYYVYTXQVOTNQN", // o
    r"I\MNMc RMQOOQNTNVOXQYTYVXYV[T\Q\O[MY", // p
    r"I\XNXc RXQVOTNQNOOMQLTLVMYO[Q\T\V[XY", // q
    r"LYPNP\ RPTQQSOUNXN", // r
    r"J[XQWOTNQNNOMQNSPTUUWVXXXYW[T\Q\N[MY", // s
    r"LXQGQXR[T\V\ RNNUN", // t
    r"I\MNMXN[P\S\U[XX RXNX\", // u
    r"JZLNR\ RXNR\", // v
    r"G]JNN\ RRNN\ RRNV\ RZNV\", // w
    r"J[MNX\ RXNM\", // x
    r"JZLNR\ RXNR\P`NbLcKc", // y
    r"J[XNM\ RMNXN RM\X\", // z
    r"KYTCRDQEPGPIQKRLSNSPQR RRDQFQHRJSKTMTOSQOSSUTWTYS[R\Q^Q`Rb RQTSVSXRZQ[P]P_QaRbTc", // {
    r"NVRCRc", // |
    r"KYPCRDSETGTISKRLQNQPSR RRDSFSHRJQKPMPOQQUSQUPWPYQ[R\S^S`Rb RSTQVQXRZS[T]T_SaRbPc", // }
    r"F^IVITJQLPNPPQTTVUXUZT[R RITJRLQNQPRTUVVXVZU[R[P", // ~
];
