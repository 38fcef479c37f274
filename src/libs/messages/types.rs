#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskRenamed(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted,
    TasksDeletedCount(usize),
    CompletedTasksCleared(usize),
    TaskNotFound(String),
    TaskIdAmbiguous(String, usize),
    TaskTitleEmpty,
    TaskTitleUnchanged,
    InvalidDueDate(String),
    ConfirmDeleteTask,
    ConfirmDeleteTasks(usize),
    ConfirmClearCompleted,
    NoCompletedTasks,
    NoTasksSelected,

    // === VIEW MESSAGES ===
    TasksHeading(String), // category label, or "All"
    NoTasksFound,
    EmptyStateSearch,
    EmptyStateAdd,
    Today,
    Tomorrow,
    NoDueDate,
    Overdue,
    StatusDone,
    StatusPending,
    SortChanged(String),
    SelectionCount(usize),
    ThemeChanged(String),
    StatisticsHeader,
    CategoryChartHeader,
    PriorityChartHeader,
    FilterSummary {
        category: String,
        status: String,
        priority: String,
        sort: String,
    },

    // === INTERACTIVE MESSAGES ===
    SelectAction,
    ActionAddTask,
    ActionToggleTask,
    ActionRenameTask,
    ActionDeleteTask,
    ActionSelectTasks,
    ActionSelectAll,
    ActionDeleteSelected,
    ActionClearCompleted,
    ActionFilterCategory,
    ActionFilterStatus,
    ActionFilterPriority,
    ActionSearch,
    ActionCycleSort,
    ActionStatistics,
    ActionToggleTheme,
    ActionQuit,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskCategory,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptSearch,
    PromptSelectTask,
    PromptSelectTasks,
    PromptCategoryFilter,
    PromptStatusFilter,
    PromptPriorityFilter,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDefaults,
    ConfigModuleView,
    ConfigModuleSafety,
    PromptSelectModules,
    PromptDefaultCategory,
    PromptDefaultPriority,
    PromptDefaultSort,
    PromptDefaultStatus,
    PromptConfirmDestructive,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),

    // === GENERIC MESSAGES ===
    OperationCancelled,
    StorageWriteFailed(String),
}
