pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const SCREEN: &str = "max-w-3xl mx-auto pt-20 pb-12";
pub const GAME_WRAPPER: &str = "w-full max-w-xl mx-auto h-full cursor-text";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_CONTENT: &str = "w-full h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_HOVER: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] hover:shadow-xl dark:hover:shadow-[0_6px_16px_-6px_rgba(255,255,255,0.06)] p-6 transform hover:-translate-y-1 transition-all duration-300 cursor-pointer";
pub const CARD_LOCKED: &str = "bg-gray-100 dark:bg-gray-800/50 rounded-lg p-6 opacity-60 cursor-not-allowed";
pub const CARD_CRUSHED: &str = "bg-green-50 dark:bg-green-900/40 border border-green-300 dark:border-green-700 rounded-lg p-6 cursor-pointer";
pub const CARD_SOLID: &str = "bg-yellow-50 dark:bg-yellow-900/30 border border-yellow-300 dark:border-yellow-700 rounded-lg p-6 cursor-pointer";
pub const CARD_FAILED: &str = "bg-red-50 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg p-6 cursor-pointer";
pub const CARD_GRID: &str = "grid grid-cols-1 sm:grid-cols-2 gap-6";
pub const BUTTON_PRIMARY_WIDE: &str = "w-full py-3 px-4 mb-4 rounded-lg font-medium text-white bg-indigo-600 hover:bg-indigo-700 transition-colors duration-200";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_TEXT: &str = "w-full text-sm text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white transition-colors duration-200";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-3 px-4 text-lg tracking-wide uppercase text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const INPUT_ERROR: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-3 px-4 text-lg tracking-wide uppercase text-gray-900 dark:text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500";
pub const SHAKE: &str = "animate-[shake_0.5s_ease-in-out]";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const CARD_TEXT: &str = "text-sm text-gray-600 dark:text-gray-400";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const LOADING: &str = "text-center text-gray-500 dark:text-gray-400 my-6";
pub const BADGE: &str = "inline-flex items-center px-3 py-1 rounded-full text-xs font-medium bg-amber-100 text-amber-800 dark:bg-amber-800 dark:text-amber-100";

// Modals
pub const MODAL_OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center p-4";
pub const MODAL_BACKDROP: &str = "absolute inset-0 bg-black/60";
pub const MODAL_CARD: &str = "relative bg-white dark:bg-gray-900 rounded-xl shadow-xl p-8 max-w-md w-full border border-gray-200/50 dark:border-gray-700/50";

// Hero section
pub const HERO_SECTION: &str = "flex flex-col items-center justify-center min-h-[calc(100vh-3rem)] py-12 px-4";
pub const HERO_TITLE: &str = "text-7xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400 mb-6";
pub const HERO_TEXT: &str = "text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto text-center mb-10";
pub const HERO_BUTTONS: &str = "flex flex-col sm:flex-row justify-center items-center gap-4";
pub const HERO_CTA_BUTTON: &str = "px-8 py-4 text-lg font-semibold text-white bg-gradient-to-r from-blue-500 to-purple-500 rounded-xl hover:from-blue-600 hover:to-purple-600 transform hover:scale-105 transition-all duration-300 shadow-lg hover:shadow-xl";
pub const HERO_LINK: &str = "mt-8 text-gray-400 hover:text-gray-200 transition-colors duration-200";

// Game screen
pub const MODE_INDICATOR: &str = "mb-8 text-center text-sm text-gray-500 dark:text-gray-400";
pub const CLUE: &str = "mb-2 text-center text-gray-600 dark:text-gray-300";
pub const ACRONYM: &str = "text-center text-5xl font-bold tracking-[0.5em] -mr-[0.5em] text-gray-900 dark:text-white";
pub const GUESS_AREA: &str = "mt-12 mb-6 flex flex-col gap-4 max-h-[340px] overflow-y-auto pr-2 scroll-smooth";
pub const GUESS_ROW: &str = "rounded-lg p-3 bg-white dark:bg-gray-800";
pub const GUESS_ROW_HIGHLIGHT: &str = "rounded-lg p-3 bg-white dark:bg-gray-800 ring-2 ring-blue-500/50";
pub const WORD_CORRECT: &str = "px-2 py-1 rounded font-semibold bg-green-500 text-black";
pub const WORD_MISPLACED: &str = "px-2 py-1 rounded font-semibold bg-yellow-400 text-black";
pub const WORD_INCORRECT: &str = "px-2 py-1 rounded font-semibold bg-gray-300 dark:bg-gray-600 text-gray-900 dark:text-white";
pub const SIMILARITY_TRACK: &str = "mt-2 h-1.5 w-full rounded-full bg-gray-200 dark:bg-gray-700";
pub const SIMILARITY_BAR: &str = "h-1.5 rounded-full bg-gradient-to-r from-blue-500 to-purple-500 transition-all duration-500";
pub const PIP_ROW: &str = "mt-6 flex justify-center items-center gap-2";
pub const SCORE_DISPLAY: &str = "mb-3 text-center text-lg font-bold text-gray-900 dark:text-white";
